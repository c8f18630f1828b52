use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::{ExportError, ImportSink, QueryError, SphereQuery, SystemsProvider};

// Canned star map that records every query it receives.
#[derive(Clone)]
pub(crate) struct StubProvider {
    names: Vec<String>,
    fail_with_status: Option<u16>,
    queries: Arc<Mutex<Vec<SphereQuery>>>,
}

impl StubProvider {
    pub(crate) fn returning(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|name| name.to_string()).collect(),
            fail_with_status: None,
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn failing(status: u16) -> Self {
        Self {
            fail_with_status: Some(status),
            ..Self::returning(&[])
        }
    }

    pub(crate) fn queries(&self) -> Vec<SphereQuery> {
        self.queries.lock().expect("queries mutex poisoned").clone()
    }
}

impl SystemsProvider for StubProvider {
    fn systems_in_sphere(&self, query: &SphereQuery) -> Result<Vec<String>, QueryError> {
        self.queries
            .lock()
            .expect("queries mutex poisoned")
            .push(*query);

        match self.fail_with_status {
            Some(status) => Err(QueryError::Status(status)),
            None => Ok(self.names.clone()),
        }
    }
}

// In-memory import sink; keeps the last batch written.
#[derive(Clone)]
pub(crate) struct RecordingSink {
    written: Arc<Mutex<Option<Vec<String>>>>,
    should_fail: bool,
}

impl RecordingSink {
    pub(crate) fn new() -> Self {
        Self {
            written: Arc::new(Mutex::new(None)),
            should_fail: false,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    pub(crate) fn written(&self) -> Option<Vec<String>> {
        self.written.lock().expect("written mutex poisoned").clone()
    }
}

impl ImportSink for RecordingSink {
    fn write_systems(&self, names: &[String]) -> Result<PathBuf, ExportError> {
        let path = PathBuf::from("ImportStars.txt");
        if self.should_fail {
            return Err(ExportError {
                path,
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            });
        }

        *self.written.lock().expect("written mutex poisoned") = Some(names.to_vec());
        Ok(path)
    }
}
