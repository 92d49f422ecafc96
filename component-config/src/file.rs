use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{Config, Error, Result};

/// File name looked up in the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "component.toml";

/// A component.toml file and the config parsed from it.
#[derive(Debug)]
pub struct ConfigFile {
    path: PathBuf,
    config: Config,
}

impl ConfigFile {
    /// Open and parse a config file. A missing file is an error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        Self::parse(path, &content)
    }

    /// Open `component.toml` in `dir` if there is one.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);
        match std::fs::read_to_string(&path) {
            Ok(content) => Self::parse(path, &content).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Box::new(Error::Io { path, source: e })),
        }
    }

    fn parse(path: PathBuf, content: &str) -> Result<Self> {
        let filename = path.display().to_string();
        let config = Config::from_str_with_filename(content, &filename)?;
        Ok(Self { path, config })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed config.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_discover_missing_file() {
        let temp = TempDir::new().unwrap();
        assert!(ConfigFile::discover(temp.path()).unwrap().is_none());
    }

    #[test]
    fn test_discover_existing_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[generate]\nadd_parts_folder = true\n",
        )
        .unwrap();

        let file = ConfigFile::discover(temp.path()).unwrap().unwrap();

        assert!(file.config().generate.add_parts_folder);
        assert_eq!(file.path(), temp.path().join(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_discover_invalid_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "[generate\n").unwrap();

        let err = ConfigFile::discover(temp.path()).unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = ConfigFile::open(temp.path().join("custom.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
