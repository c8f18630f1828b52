use std::fmt;

/// Radius used when a sphere command omits it.
pub const DEFAULT_RADIUS: u32 = 100;

/// A point in the game's galactic coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Coordinate {
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// All known systems within `radius` light years of `center`.
///
/// EDSM documents the radius as [0, 200]; the bound is left to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SphereQuery {
    pub center: Coordinate,
    pub radius: u32,
}

impl SphereQuery {
    pub const fn new(center: Coordinate, radius: u32) -> Self {
        Self { center, radius }
    }

    pub const fn with_default_radius(center: Coordinate) -> Self {
        Self::new(center, DEFAULT_RADIUS)
    }
}
