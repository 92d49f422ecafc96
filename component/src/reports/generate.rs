//! Generate command report data structures.

use create_component_codegen::PreviewFile;

use super::output::{Output, Report};

/// Report data from scaffolding a component.
#[derive(Debug)]
pub enum GenerateReport {
    /// Dry run: nothing was written.
    Preview {
        directory: String,
        files: Vec<PreviewFile>,
        parts_folder: bool,
    },
    /// Files written to disk.
    Written {
        directory: String,
        files: Vec<String>,
        parts_folder: bool,
    },
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match self {
            Self::Preview {
                directory,
                files,
                parts_folder,
            } => {
                for file in files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }

                out.divider("Summary");
                out.preformatted(&format!(
                    "{} files would be written to {}",
                    files.len(),
                    directory
                ));
                if *parts_folder {
                    out.preformatted("parts/ would be created");
                }
            }
            Self::Written {
                directory,
                files,
                parts_folder,
            } => {
                out.preformatted(&format!("written files to {}", directory));
                out.newline();
                out.section("Created");
                for file in files {
                    out.added_item(file);
                }
                if *parts_folder {
                    out.added_item("parts/");
                }
            }
        }
    }
}
