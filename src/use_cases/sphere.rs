use std::path::PathBuf;

use crate::domain::{ExportError, ImportSink, QueryError, SphereQuery, SystemsProvider};

// Sphere export use case with injected dependencies.
//
// The two steps are exposed separately so the console can report progress between them.
pub struct SphereExportUseCase<P, S> {
    pub provider: P,
    pub sink: S,
}

impl<P, S> SphereExportUseCase<P, S>
where
    P: SystemsProvider,
    S: ImportSink,
{
    pub fn new(provider: P, sink: S) -> Self {
        Self { provider, sink }
    }

    #[tracing::instrument(name = "sphere_fetch", skip_all, fields(center = %query.center, radius = query.radius))]
    pub fn fetch(&self, query: &SphereQuery) -> Result<Vec<String>, QueryError> {
        self.provider.systems_in_sphere(query).inspect_err(|err| {
            tracing::error!(error = %err, network = err.is_network(), "sphere query failed.");
        })
    }

    pub fn export(&self, names: &[String]) -> Result<PathBuf, ExportError> {
        self.sink.write_systems(names).inspect_err(|err| {
            tracing::error!(error = %err, "failed to write import file.");
        })
    }
}
