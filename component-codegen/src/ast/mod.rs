//! TypeScript AST builders for the statements a component directory uses.
//!
//! These provide a small API for constructing TypeScript syntax,
//! which can then be rendered via CodeBuilder.

mod component;
mod exports;
mod imports;
mod types;

pub use component::ArrowComponent;
pub use exports::Export;
pub use imports::Import;
pub use types::ObjectType;
