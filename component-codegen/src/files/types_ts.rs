//! `{name}.types.ts` generator.

use create_component_core::{GeneratedFile, to_props_name};

use crate::{ast::ObjectType, code_file::CodeFile};

/// Exports the (empty) props type of the component.
pub struct TypesTs {
    name: String,
}

impl TypesTs {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl GeneratedFile for TypesTs {
    fn file_name(&self) -> String {
        format!("{}.types.ts", self.name)
    }

    fn render(&self) -> String {
        CodeFile::new()
            .add(ObjectType::new(to_props_name(&self.name)))
            .render()
    }
}
