//! TypeScript import builder.

use crate::builder::{CodeFragment, Renderable};

/// Builder for `import` statements with a default and/or named bindings.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    default: Option<String>,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            named: Vec::new(),
        }
    }

    /// Bind the module's default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Bind a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// The import statement, without trailing newline.
    pub fn statement(&self) -> String {
        let mut bindings = Vec::with_capacity(2);
        if let Some(default) = &self.default {
            bindings.push(default.clone());
        }
        if !self.named.is_empty() {
            bindings.push(format!("{{ {} }}", self.named.join(", ")));
        }
        format!("import {} from \"{}\";", bindings.join(", "), self.from)
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.statement())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_import() {
        let i = Import::new("react").default("React").statement();
        assert_eq!(i, "import React from \"react\";");
    }

    #[test]
    fn test_named_import() {
        let i = Import::new("./user-card.types")
            .named("UserCardProps")
            .statement();
        assert_eq!(i, "import { UserCardProps } from \"./user-card.types\";");
    }

    #[test]
    fn test_default_and_named_import() {
        let i = Import::new("react")
            .default("React")
            .named("useState")
            .named("useEffect")
            .statement();
        assert_eq!(i, "import React, { useState, useEffect } from \"react\";");
    }
}
