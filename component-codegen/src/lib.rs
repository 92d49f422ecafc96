//! TypeScript file planning and rendering for the create-component scaffolder.
//!
//! Given a kebab-case component name and a set of [`Options`], the planner
//! decides which files the component directory gets and renders each of them.
//! [`Scaffold`] then previews or writes that plan.
//!
//! ```
//! use create_component_codegen::{Options, Scaffold};
//!
//! let options = Options {
//!     add_types_file: true,
//!     ..Options::default()
//! };
//! let files = Scaffold::new("user-card", options).preview();
//!
//! assert_eq!(files.len(), 3);
//! assert_eq!(files[2].path, "user-card/index.ts");
//! ```
//!
//! # Generated Output
//!
//! - `{name}.component.tsx` or `{name}.screen.tsx` - The component
//! - `{name}.types.ts` - Props type (optional)
//! - `{name}.styles.tsx`, `{name}.consts.ts` - Empty placeholders (optional)
//! - `{name}.graphql.ts` - Relay `graphql` macro import (optional)
//! - `index.ts` - Re-export of the component file
//! - `parts/` - Empty sub-directory (optional)

mod code_file;
mod generator;
mod options;
mod planner;

pub mod ast;
pub mod builder;
pub mod files;

pub use code_file::CodeFile;
pub use generator::{GenerateResult, PreviewFile, Scaffold};
pub use options::{ComponentSuffix, Options, effective};
pub use planner::{FileKind, PARTS_DIR, Plan, PlannedFile, plan};
