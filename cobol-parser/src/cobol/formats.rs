//! Tree output formats
//!
//! `tree` is the LISP-like string tree written to the `AST.txt` file. `json` is the same
//! tree through serde, terminals carrying their byte spans.

use crate::cobol::parsing::ParseTree;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Tree,
    Json,
}

impl OutputFormat {
    /// All formats, in the order they are listed to users.
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Tree, OutputFormat::Json];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Tree => "tree",
            OutputFormat::Json => "json",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.as_str() == name)
    }
}

/// Render a tree in the requested format.
pub fn render(tree: &ParseTree, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Tree => Ok(serialize_string_tree(tree)),
        OutputFormat::Json => to_json(tree),
    }
}

pub fn serialize_string_tree(tree: &ParseTree) -> String {
    tree.to_string_tree()
}

pub fn to_json(tree: &ParseTree) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tree)
}
