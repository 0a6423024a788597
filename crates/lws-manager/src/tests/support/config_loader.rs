//! Test configuration loaders backed by documents in a temporary directory.

use camino::Utf8PathBuf;
use tempfile::TempDir;

use lws_config::{ConfigError, Configuration, RuntimeOptions, SchemaRegistry};

use crate::bootstrap::{ConfigLoader, FileConfigLoader};

/// Loader that writes a document to disk and reads it back through
/// [`FileConfigLoader`].
pub struct DocumentConfigLoader {
    _dir: TempDir,
    inner: FileConfigLoader,
}

impl DocumentConfigLoader {
    #[must_use]
    pub fn new(contents: &str) -> Self {
        let dir = TempDir::new().expect("failed to create temporary directory for config");
        let path = dir.path().join("lws-config.yaml");
        std::fs::write(&path, contents).expect("failed to write configuration document");
        let utf8 = Utf8PathBuf::from_path_buf(path).expect("temporary path was not valid UTF-8");
        Self {
            _dir: dir,
            inner: FileConfigLoader::new(Some(utf8)),
        }
    }
}

impl ConfigLoader for DocumentConfigLoader {
    fn load(
        &self,
        registry: &SchemaRegistry,
    ) -> Result<(RuntimeOptions, Configuration), ConfigError> {
        self.inner.load(registry)
    }
}

/// Loader pointed at a directory, which always fails to read.
pub struct FailingConfigLoader {
    dir: TempDir,
}

impl FailingConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temporary directory"),
        }
    }
}

impl ConfigLoader for FailingConfigLoader {
    fn load(
        &self,
        registry: &SchemaRegistry,
    ) -> Result<(RuntimeOptions, Configuration), ConfigError> {
        lws_config::load(registry, Some(self.dir.path()))
    }
}
