use crate::domain::{ExportError, ImportSink};
use std::fs;
use std::path::{Path, PathBuf};

pub const IMPORT_FILE_NAME: &str = "ImportStars.txt";

// Import file consumed by the external tool: one system name per line.
#[derive(Debug, Clone)]
pub struct ImportFile {
    path: PathBuf,
}

impl ImportFile {
    // An empty directory resolves to the working directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(IMPORT_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ImportSink for ImportFile {
    fn write_systems(&self, names: &[String]) -> Result<PathBuf, ExportError> {
        let mut contents = names.join("\n");
        contents.push('\n');

        fs::write(&self.path, contents).map_err(|source| ExportError {
            path: self.path.clone(),
            source,
        })?;

        tracing::info!(path = %self.path.display(), count = names.len(), "import file written.");
        Ok(self.path.clone())
    }
}
