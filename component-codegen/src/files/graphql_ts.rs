//! `{name}.graphql.ts` generator.

use create_component_core::GeneratedFile;

use crate::{ast::Import, code_file::CodeFile};

/// Module the `graphql` tagged-template macro is imported from.
pub const GRAPHQL_MACRO_MODULE: &str = "babel-plugin-relay/macro";

/// Wires in the Relay `graphql` macro for the component's queries.
pub struct GraphqlTs {
    name: String,
}

impl GraphqlTs {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl GeneratedFile for GraphqlTs {
    fn file_name(&self) -> String {
        format!("{}.graphql.ts", self.name)
    }

    fn render(&self) -> String {
        CodeFile::new()
            .import(Import::new(GRAPHQL_MACRO_MODULE).named("graphql"))
            .render()
    }
}
