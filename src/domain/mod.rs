// Domain layer: galactic coordinates, query errors and the ports use cases depend on.

mod coordinate;
mod errors;
mod ports;

pub use coordinate::{Coordinate, DEFAULT_RADIUS, SphereQuery};
pub use errors::{ExportError, QueryError};
pub use ports::{ImportSink, SystemsProvider};
