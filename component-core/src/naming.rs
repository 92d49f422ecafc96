//! Identifier derivation from a kebab-case component name.

use crate::{Error, Result};

/// Uppercase the first character of a segment, leaving the rest untouched.
fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a kebab-case name to PascalCase (e.g., "my-component" -> "MyComponent")
///
/// Only the first character of each segment is touched, so already-cased
/// input keeps its inner capitals. Empty segments contribute nothing.
pub fn to_pascal_case(name: &str) -> String {
    name.split('-').map(capitalize).collect()
}

/// Name used for the exported component value.
///
/// Every segment is capitalized, the first one included, so the result is
/// identical to [`to_pascal_case`]. Generated call sites import the component
/// by this exact name.
pub fn to_camel_case(name: &str) -> String {
    name.split('-').map(capitalize).collect()
}

/// Name of the props type exported by the types file (e.g., "MyComponentProps")
pub fn to_props_name(name: &str) -> String {
    format!("{}Props", to_pascal_case(name))
}

/// Same-directory relative import path (e.g., "./my-component")
pub fn to_import_path(segment: &str) -> String {
    format!("./{}", segment)
}

/// Reject names that would escape the output directory when used as a path.
///
/// Casing is not checked: degenerate kebab-case such as `a--b` is accepted.
pub fn validate_component_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        Some("name must not be empty")
    } else if name == "." || name == ".." {
        Some("name must not be a relative directory reference")
    } else if name.contains(['/', '\\']) {
        Some("name must not contain path separators")
    } else if name.contains('\0') {
        Some("name must not contain NUL bytes")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(Box::new(Error::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        })),
        None => Ok(()),
    }
}
