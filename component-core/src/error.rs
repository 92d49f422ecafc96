use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for scaffolding operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("directory '{}' already exists", .path.display())]
    #[diagnostic(
        code(create_component::directory_exists),
        help("choose another component name or remove the existing directory")
    )]
    DirectoryAlreadyExists { path: PathBuf },

    #[error("failed to write '{}'", .path.display())]
    #[diagnostic(
        code(create_component::write_failed),
        help("files written before this one were left in place")
    )]
    FileWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory '{}'", .path.display())]
    #[diagnostic(code(create_component::unknown))]
    Unknown {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid component name '{name}'")]
    #[diagnostic(
        code(create_component::invalid_name),
        help("{reason}. Use a kebab-case name such as 'user-card'.")
    )]
    InvalidName { name: String, reason: String },
}
