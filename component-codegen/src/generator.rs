//! Writes a planned component directory to disk.

use std::path::{Path, PathBuf};

use create_component_core::{GeneratedFile, Result, create_dir};
use tracing::debug;

use crate::{
    options::Options,
    planner::{PARTS_DIR, Plan, plan},
};

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Result of writing a component directory
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// The created component directory
    pub directory: PathBuf,
    /// File names written, in order
    pub written: Vec<String>,
    /// Whether the `parts/` directory was created
    pub parts_folder: bool,
}

impl Plan {
    /// Files as they would land relative to the output directory.
    pub fn preview(&self) -> Vec<PreviewFile> {
        self.files
            .iter()
            .map(|file| PreviewFile {
                path: format!("{}/{}", self.directory, file.relative_path),
                content: file.content.clone(),
            })
            .collect()
    }

    /// Write every planned file into an existing `directory`, then create
    /// `parts/` if signalled.
    ///
    /// Stops at the first failure; files written before it stay on disk.
    pub fn write(&self, directory: &Path) -> Result<Vec<String>> {
        let mut written = Vec::with_capacity(self.files.len());
        for file in &self.files {
            file.write(directory)?;
            written.push(file.relative_path.clone());
        }

        if self.parts_folder {
            create_dir(&directory.join(PARTS_DIR))?;
        }

        Ok(written)
    }
}

/// Scaffolds one component.
pub struct Scaffold {
    name: String,
    options: Options,
}

impl Scaffold {
    pub fn new(name: impl Into<String>, options: Options) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }

    /// Plan the file set without touching the filesystem.
    pub fn plan(&self) -> Plan {
        plan(&self.name, &self.options)
    }

    /// Preview generated files without writing to disk.
    pub fn preview(&self) -> Vec<PreviewFile> {
        self.plan().preview()
    }

    /// Create the component directory inside `output_dir` and write every file.
    ///
    /// The directory must not exist yet.
    pub fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let plan = self.plan();
        let directory = output_dir.join(&plan.directory);

        debug!(
            component = %self.name,
            files = plan.files.len(),
            parts = plan.parts_folder,
            "generating component"
        );

        create_dir(&directory)?;
        let written = plan.write(&directory)?;

        Ok(GenerateResult {
            directory,
            written,
            parts_folder: plan.parts_folder,
        })
    }
}
