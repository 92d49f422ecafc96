//! Project configuration for create-component.
//!
//! A `component.toml` next to where components are generated can switch
//! flags on by default:
//!
//! ```toml
//! [generate]
//! add_types_file = true
//! screen_over_component_suffix = true
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;

use std::str::FromStr;

pub use error::{Error, Result};
pub use file::{CONFIG_FILE_NAME, ConfigFile};
use miette::{NamedSource, SourceSpan};
use serde::Deserialize;

/// Root schema for component.toml
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default flag values for `create-component generate`
    #[serde(default)]
    pub generate: GenerateDefaults,
}

/// Flags switched on for every `generate` run.
///
/// A flag set here cannot be switched off from the command line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateDefaults {
    pub add_types_file: bool,
    pub add_consts_file: bool,
    pub add_styles_file: bool,
    pub add_graphql_file: bool,
    pub add_parts_folder: bool,
    pub screen_over_component_suffix: bool,
    pub use_defaults: bool,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILE_NAME)
    }
}

impl Config {
    /// Parse a component.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|source| {
            let span = source.span().map(SourceSpan::from);
            Box::new(Error::Parse {
                src: NamedSource::new(filename, content.to_string()),
                span,
                source,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_generate_section() {
        let config = Config::from_str(
            r#"
            [generate]
            add_types_file = true
            screen_over_component_suffix = true
            "#,
        )
        .unwrap();

        assert!(config.generate.add_types_file);
        assert!(config.generate.screen_over_component_suffix);
        assert!(!config.generate.add_consts_file);
        assert!(!config.generate.use_defaults);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Config::from_str(
            r#"
            [generate]
            add_tests_file = true
            "#,
        )
        .unwrap_err();

        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        assert!(Config::from_str("[page]\nroute = true\n").is_err());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let err = Config::from_str("[generate]\nuse_defaults = \"yes\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }
}
