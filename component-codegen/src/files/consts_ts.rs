//! `{name}.consts.ts` generator.

use create_component_core::GeneratedFile;

/// Empty placeholder for component constants.
pub struct ConstsTs {
    name: String,
}

impl ConstsTs {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl GeneratedFile for ConstsTs {
    fn file_name(&self) -> String {
        format!("{}.consts.ts", self.name)
    }

    fn render(&self) -> String {
        String::new()
    }
}
