//! Arrow-function React component builder.

use crate::builder::{CodeFragment, Renderable};

/// `export const Name = ({ ...props }: Type) => { return <div></div>; };`
#[derive(Debug, Clone)]
pub struct ArrowComponent {
    name: String,
    props_type: String,
}

impl ArrowComponent {
    pub fn new(name: impl Into<String>, props_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            props_type: props_type.into(),
        }
    }
}

impl Renderable for ArrowComponent {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Block {
            header: format!(
                "export const {} = ({{ ...props }}: {}) => {{",
                self.name, self.props_type
            ),
            body: vec![CodeFragment::Line("return <div></div>;".to_string())],
            close: Some("};".to_string()),
        }]
    }
}
