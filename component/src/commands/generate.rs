use std::path::PathBuf;

use clap::Args;
use create_component_codegen::Options;
use create_component_config::{ConfigFile, GenerateDefaults};
use eyre::Result;
use tracing::debug;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Component name in kebab-case (e.g. user-card)
    #[arg(value_name = "COMPONENT_NAME")]
    pub component_name: String,

    /// Add {name}.types.ts
    #[arg(short = 't', long, alias = "addTypesFile")]
    pub add_types_file: bool,

    /// Add {name}.consts.ts
    #[arg(short = 'c', long, alias = "addConstsFile")]
    pub add_consts_file: bool,

    /// Add {name}.styles.tsx
    #[arg(short = 's', long, alias = "addStylesFile")]
    pub add_styles_file: bool,

    /// Add {name}.graphql.ts
    #[arg(short = 'g', long, alias = "addGraphqlFile")]
    pub add_graphql_file: bool,

    /// Add an empty ./parts/ folder
    #[arg(short = 'p', long, alias = "addPartsFolder")]
    pub add_parts_folder: bool,

    /// Create {name}.screen.tsx rather than {name}.component.tsx
    #[arg(short = 'S', long, alias = "screenOverComponentSuffix")]
    pub screen_over_component_suffix: bool,

    /// Create all available files
    #[arg(short = 'd', long, alias = "useDefaults")]
    pub use_defaults: bool,

    /// Directory the component directory is created in
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Path to component.toml (defaults to <output>/component.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let config = match &self.config {
            Some(path) => Some(ConfigFile::open(path).unwrap_or_exit()),
            None => ConfigFile::discover(&self.output).unwrap_or_exit(),
        };

        let defaults = match &config {
            Some(file) => {
                debug!(path = %file.path().display(), "loaded config");
                file.config().generate
            }
            None => GenerateDefaults::default(),
        };

        let options = self.flags().union(options_from_config(defaults));
        debug!(?options, "resolved options");

        let report = ops::generate(ops::generate::GenerateOptions {
            name: &self.component_name,
            output_dir: &self.output,
            options,
            dry_run: self.dry_run,
        })
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn flags(&self) -> Options {
        Options {
            add_types_file: self.add_types_file,
            add_consts_file: self.add_consts_file,
            add_styles_file: self.add_styles_file,
            add_graphql_file: self.add_graphql_file,
            add_parts_folder: self.add_parts_folder,
            screen_over_component_suffix: self.screen_over_component_suffix,
            use_defaults: self.use_defaults,
        }
    }
}

fn options_from_config(defaults: GenerateDefaults) -> Options {
    Options {
        add_types_file: defaults.add_types_file,
        add_consts_file: defaults.add_consts_file,
        add_styles_file: defaults.add_styles_file,
        add_graphql_file: defaults.add_graphql_file,
        add_parts_folder: defaults.add_parts_folder,
        screen_over_component_suffix: defaults.screen_over_component_suffix,
        use_defaults: defaults.use_defaults,
    }
}
