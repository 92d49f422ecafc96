//! CodeFile abstraction for structured TypeScript file generation.
//!
//! Organizes a generated file into an imports section and a body.

use crate::{
    ast::Import,
    builder::{CodeBuilder, CodeFragment, Renderable},
};

/// A structured representation of a TypeScript file.
///
/// Imports come first, then a blank line, then each body element separated
/// by a blank line.
///
/// # Example
///
/// ```
/// use create_component_codegen::{CodeFile, ast::{ArrowComponent, Import}};
///
/// let code = CodeFile::new()
///     .import(Import::new("react").default("React"))
///     .add(ArrowComponent::new("UserCard", "any"))
///     .render();
///
/// assert!(code.starts_with("import React from \"react\";\n\nexport const UserCard"));
/// ```
#[derive(Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import statement.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the file with 2-space indentation.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new();

        for import in &self.imports {
            builder.emit(import);
        }

        if !self.imports.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}
