//! Decides which files a component directory gets and what goes in them.
//!
//! Planning is pure: no I/O and no failure modes. The resulting [`Plan`] is
//! handed to [`Scaffold`](crate::Scaffold) for writing.

use create_component_core::GeneratedFile;

use crate::{
    files::{ComponentTsx, ConstsTs, GraphqlTs, IndexTs, StylesTsx, TypesTs},
    options::Options,
};

/// Name of the optional empty sub-directory.
pub const PARTS_DIR: &str = "parts";

/// Every file a component directory can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Component,
    Types,
    Styles,
    Consts,
    Graphql,
    Index,
}

impl FileKind {
    /// Emission order. `Index` comes last since it refers to the component file.
    pub const TABLE: [FileKind; 6] = [
        FileKind::Component,
        FileKind::Types,
        FileKind::Styles,
        FileKind::Consts,
        FileKind::Graphql,
        FileKind::Index,
    ];

    /// Whether this file is emitted under the given options.
    pub fn included(self, options: &Options) -> bool {
        match self {
            FileKind::Component | FileKind::Index => true,
            FileKind::Types => options.types_file(),
            FileKind::Styles => options.styles_file(),
            FileKind::Consts => options.consts_file(),
            FileKind::Graphql => options.graphql_file(),
        }
    }

    fn generator(self, name: &str, options: &Options) -> Box<dyn GeneratedFile> {
        match self {
            FileKind::Component => Box::new(
                ComponentTsx::new(name, options.suffix()).typed(options.types_file()),
            ),
            FileKind::Types => Box::new(TypesTs::new(name)),
            FileKind::Styles => Box::new(StylesTsx::new(name)),
            FileKind::Consts => Box::new(ConstsTs::new(name)),
            FileKind::Graphql => Box::new(GraphqlTs::new(name)),
            FileKind::Index => Box::new(IndexTs::new(name, options.suffix())),
        }
    }
}

/// A file ready to be written, relative to the component directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub kind: FileKind,
    pub relative_path: String,
    pub content: String,
}

/// Everything a single invocation will create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Directory to create, relative to the output directory.
    pub directory: String,
    /// Files in emission order; never empty.
    pub files: Vec<PlannedFile>,
    /// Whether an empty `parts/` directory is created next to the files.
    pub parts_folder: bool,
}

impl GeneratedFile for PlannedFile {
    fn file_name(&self) -> String {
        self.relative_path.clone()
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}

impl Plan {
    /// Look up a planned file by kind.
    pub fn file(&self, kind: FileKind) -> Option<&PlannedFile> {
        self.files.iter().find(|f| f.kind == kind)
    }
}

/// Plan the file set for `name` under `options`.
pub fn plan(name: &str, options: &Options) -> Plan {
    let files = FileKind::TABLE
        .into_iter()
        .filter(|kind| kind.included(options))
        .map(|kind| {
            let generator = kind.generator(name, options);
            PlannedFile {
                kind,
                relative_path: generator.file_name(),
                content: generator.render(),
            }
        })
        .collect();

    Plan {
        directory: name.to_string(),
        files,
        parts_folder: options.parts_folder(),
    }
}
