//! Generate operation - scaffold one component directory.

use std::path::Path;

use create_component_codegen::{Options, Scaffold};
use create_component_core::{Result, validate_component_name};

use crate::reports::GenerateReport;

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Component name as typed by the user.
    pub name: &'a str,
    /// Directory the component directory is created in.
    pub output_dir: &'a Path,
    /// Resolved flags (command line merged with config).
    pub options: Options,
    /// Whether to preview without writing.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(opts: GenerateOptions) -> Result<GenerateReport> {
    validate_component_name(opts.name)?;

    let scaffold = Scaffold::new(opts.name, opts.options);

    if opts.dry_run {
        let plan = scaffold.plan();

        return Ok(GenerateReport::Preview {
            directory: opts.output_dir.join(&plan.directory).display().to_string(),
            files: plan.preview(),
            parts_folder: plan.parts_folder,
        });
    }

    let result = scaffold.generate(opts.output_dir)?;

    Ok(GenerateReport::Written {
        directory: result.directory.display().to_string(),
        files: result.written,
        parts_folder: result.parts_folder,
    })
}
