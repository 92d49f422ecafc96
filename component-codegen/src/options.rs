//! Option set controlling which files are scaffolded.

use std::fmt;

/// Whether a file-inclusion flag is in effect once `use_defaults` is applied.
pub const fn effective(flag: bool, use_defaults: bool) -> bool {
    flag || use_defaults
}

/// Independent toggles for a single scaffold invocation.
///
/// `use_defaults` switches on every file-inclusion toggle. It does not touch
/// `add_parts_folder` or `screen_over_component_suffix`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub add_types_file: bool,
    pub add_consts_file: bool,
    pub add_styles_file: bool,
    pub add_graphql_file: bool,
    pub add_parts_folder: bool,
    pub screen_over_component_suffix: bool,
    pub use_defaults: bool,
}

impl Options {
    /// Options with every file-inclusion toggle forced on.
    pub fn defaults() -> Self {
        Self {
            use_defaults: true,
            ..Self::default()
        }
    }

    pub fn types_file(&self) -> bool {
        effective(self.add_types_file, self.use_defaults)
    }

    pub fn consts_file(&self) -> bool {
        effective(self.add_consts_file, self.use_defaults)
    }

    pub fn styles_file(&self) -> bool {
        effective(self.add_styles_file, self.use_defaults)
    }

    pub fn graphql_file(&self) -> bool {
        effective(self.add_graphql_file, self.use_defaults)
    }

    pub fn parts_folder(&self) -> bool {
        self.add_parts_folder
    }

    pub fn suffix(&self) -> ComponentSuffix {
        if self.screen_over_component_suffix {
            ComponentSuffix::Screen
        } else {
            ComponentSuffix::Component
        }
    }

    /// Combine two option sets; a toggle is on if it is on in either.
    pub fn union(self, other: Self) -> Self {
        Self {
            add_types_file: self.add_types_file || other.add_types_file,
            add_consts_file: self.add_consts_file || other.add_consts_file,
            add_styles_file: self.add_styles_file || other.add_styles_file,
            add_graphql_file: self.add_graphql_file || other.add_graphql_file,
            add_parts_folder: self.add_parts_folder || other.add_parts_folder,
            screen_over_component_suffix: self.screen_over_component_suffix
                || other.screen_over_component_suffix,
            use_defaults: self.use_defaults || other.use_defaults,
        }
    }
}

/// Suffix of the component file, shared with the `index.ts` re-export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentSuffix {
    Component,
    Screen,
}

impl ComponentSuffix {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Screen => "screen",
        }
    }
}

impl fmt::Display for ComponentSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
