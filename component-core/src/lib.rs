//! Core utilities and types for the create-component scaffolder.
//!
//! This crate provides the naming rules every generated file agrees on,
//! plus the small set of filesystem primitives used to write them.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod naming;

pub use error::{Error, Result};
// File operations
pub use file::{File, GeneratedFile, create_dir};
// Naming
pub use naming::{
    to_camel_case, to_import_path, to_pascal_case, to_props_name, validate_component_name,
};
