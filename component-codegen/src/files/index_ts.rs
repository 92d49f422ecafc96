//! index.ts re-export generator.

use create_component_core::{GeneratedFile, to_import_path};

use crate::{ast::Export, options::ComponentSuffix};

/// Re-exports everything from the component file.
pub struct IndexTs {
    name: String,
    suffix: ComponentSuffix,
}

impl IndexTs {
    pub fn new(name: impl Into<String>, suffix: ComponentSuffix) -> Self {
        Self {
            name: name.into(),
            suffix,
        }
    }
}

impl GeneratedFile for IndexTs {
    fn file_name(&self) -> String {
        "index.ts".to_string()
    }

    fn render(&self) -> String {
        Export::all(format!("{}.{}", to_import_path(&self.name), self.suffix)).statement()
    }
}
