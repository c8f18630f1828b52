use std::path::PathBuf;

use crate::domain::coordinate::SphereQuery;
use crate::domain::errors::{ExportError, QueryError};

// Port for the remote star map. The use case depends on this trait, not on reqwest.
pub trait SystemsProvider {
    // Names of the systems inside the sphere, in the order the source returned them.
    fn systems_in_sphere(&self, query: &SphereQuery) -> Result<Vec<String>, QueryError>;
}

// Port for the file handed to the importing tool.
pub trait ImportSink {
    // Replaces the previous import with `names` and returns where it was written.
    fn write_systems(&self, names: &[String]) -> Result<PathBuf, ExportError>;
}
