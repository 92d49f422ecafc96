//! `{name}.styles.tsx` generator.

use create_component_core::GeneratedFile;

/// Empty placeholder for component styles.
pub struct StylesTsx {
    name: String,
}

impl StylesTsx {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl GeneratedFile for StylesTsx {
    fn file_name(&self) -> String {
        format!("{}.styles.tsx", self.name)
    }

    fn render(&self) -> String {
        String::new()
    }
}
