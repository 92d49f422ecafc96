//! `{name}.component.tsx` / `{name}.screen.tsx` generator.

use create_component_core::{GeneratedFile, to_camel_case, to_import_path, to_props_name};

use crate::{
    ast::{ArrowComponent, Import},
    code_file::CodeFile,
    options::ComponentSuffix,
};

/// The component file itself.
pub struct ComponentTsx {
    name: String,
    suffix: ComponentSuffix,
    typed: bool,
}

impl ComponentTsx {
    pub fn new(name: impl Into<String>, suffix: ComponentSuffix) -> Self {
        Self {
            name: name.into(),
            suffix,
            typed: false,
        }
    }

    /// Wire the props parameter to the type exported by the types file.
    pub fn typed(mut self, typed: bool) -> Self {
        self.typed = typed;
        self
    }

    fn props_type(&self) -> String {
        if self.typed {
            format!("{}Props", to_camel_case(&self.name))
        } else {
            "any".to_string()
        }
    }
}

impl GeneratedFile for ComponentTsx {
    fn file_name(&self) -> String {
        format!("{}.{}.tsx", self.name, self.suffix)
    }

    fn render(&self) -> String {
        let mut file = CodeFile::new().import(Import::new("react").default("React"));

        if self.typed {
            file = file.import(
                Import::new(to_import_path(&format!("{}.types", self.name)))
                    .named(to_props_name(&self.name)),
            );
        }

        file.add(ArrowComponent::new(
            to_camel_case(&self.name),
            self.props_type(),
        ))
        .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_follows_suffix() {
        assert_eq!(
            ComponentTsx::new("user-card", ComponentSuffix::Component).file_name(),
            "user-card.component.tsx"
        );
        assert_eq!(
            ComponentTsx::new("user-card", ComponentSuffix::Screen).file_name(),
            "user-card.screen.tsx"
        );
    }

    #[test]
    fn test_typed_component_imports_props() {
        let code = ComponentTsx::new("user-card", ComponentSuffix::Component)
            .typed(true)
            .render();
        assert!(code.contains("import React from \"react\";"));
        assert!(code.contains("import { UserCardProps } from \"./user-card.types\";"));
        assert!(code.contains("export const UserCard = ({ ...props }: UserCardProps) => {"));
    }

    #[test]
    fn test_untyped_component_uses_any() {
        let code = ComponentTsx::new("user-card", ComponentSuffix::Component).render();
        assert!(!code.contains(".types"));
        assert!(code.contains("export const UserCard = ({ ...props }: any) => {"));
    }
}
