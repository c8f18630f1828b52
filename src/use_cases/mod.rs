// Use cases layer: application workflows behind the console commands.

pub mod sphere;

#[cfg(test)]
pub(crate) mod test_support;

pub use sphere::SphereExportUseCase;
