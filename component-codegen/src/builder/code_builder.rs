//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Renderable};

/// One level of indentation in generated TypeScript.
const INDENT: &str = "  ";

/// Buffer for building code with proper indentation.
///
/// # Example
///
/// ```
/// use create_component_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::new();
/// builder
///     .push_line("function main() {")
///     .push_indent()
///     .push_line("return 1;")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "function main() {\n  return 1;\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::new();
        builder.push_line("const x = 1;");
        assert_eq!(builder.build(), "const x = 1;\n");
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut builder = CodeBuilder::new();
        builder
            .push_indent()
            .push_line("a;")
            .push_blank()
            .push_line("b;");
        assert_eq!(builder.build(), "  a;\n\n  b;\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::new();
        builder.push_dedent().push_dedent().push_line("x;");
        assert_eq!(builder.build(), "x;\n");
    }

    #[test]
    fn test_nested_block_fragment() {
        let mut builder = CodeBuilder::new();
        builder.apply_fragment(CodeFragment::Block {
            header: "const f = () => {".to_string(),
            body: vec![CodeFragment::Block {
                header: "if (x) {".to_string(),
                body: vec![CodeFragment::Line("return 1;".to_string())],
                close: Some("}".to_string()),
            }],
            close: Some("};".to_string()),
        });
        assert_eq!(
            builder.build(),
            "const f = () => {\n  if (x) {\n    return 1;\n  }\n};\n"
        );
    }
}
