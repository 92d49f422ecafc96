//! TypeScript re-export builder.

/// `export * from "module"` with no terminating semicolon.
#[derive(Debug, Clone)]
pub struct Export {
    from: String,
}

impl Export {
    /// Re-export everything from `module`.
    pub fn all(module: impl Into<String>) -> Self {
        Self {
            from: module.into(),
        }
    }

    /// The export statement, without trailing newline.
    pub fn statement(&self) -> String {
        format!("export * from \"{}\"", self.from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_re_export_all() {
        let e = Export::all("./user-card.component").statement();
        assert_eq!(e, "export * from \"./user-card.component\"");
    }

    #[test]
    fn test_statement_ends_with_module_path() {
        let e = Export::all("./user-card.screen").statement();
        assert!(e.ends_with(".screen\""));
    }
}
