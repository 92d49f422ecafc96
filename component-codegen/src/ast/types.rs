//! TypeScript object type builder.

use crate::builder::{CodeFragment, Renderable};

/// An exported, empty object type: `export type Foo = {};`
#[derive(Debug, Clone)]
pub struct ObjectType {
    name: String,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Renderable for ObjectType {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(format!("export type {} = {{}};", self.name))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CodeBuilder;

    #[test]
    fn test_empty_object_type() {
        let mut builder = CodeBuilder::new();
        builder.emit(&ObjectType::new("UserCardProps"));
        assert_eq!(builder.build(), "export type UserCardProps = {};\n");
    }
}
