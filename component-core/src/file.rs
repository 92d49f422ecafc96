use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{Error, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// File name relative to the component directory
    fn file_name(&self) -> String;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file into the given directory
    fn write(&self, dir: &Path) -> Result<()> {
        File::new(dir.join(self.file_name()), self.render()).write()
    }
}

/// Create a single directory.
///
/// The parent must already exist; an existing directory is an error rather
/// than something to reuse.
pub fn create_dir(path: &Path) -> Result<()> {
    std::fs::create_dir(path).map_err(|source| {
        let path = path.to_path_buf();
        Box::new(match source.kind() {
            ErrorKind::AlreadyExists => Error::DirectoryAlreadyExists { path },
            _ => Error::Unknown { path, source },
        })
    })?;
    debug!(path = %path.display(), "created directory");
    Ok(())
}

/// A file to be written
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Write the file, replacing any previous content
    pub fn write(&self) -> Result<()> {
        std::fs::write(&self.path, &self.content).map_err(|source| {
            Box::new(Error::FileWriteFailure {
                path: self.path.clone(),
                source,
            })
        })?;
        debug!(path = %self.path.display(), bytes = self.content.len(), "wrote file");
        Ok(())
    }
}
