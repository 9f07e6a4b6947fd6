//! Error and diagnostic types.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::types::BlockType;

/// Failure to load a page model.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("failed to read page model {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid page model: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Non-fatal problem with a single block. The block is skipped, the page
/// still renders.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    #[error("block type \"{type_name}\" not found (block \"{id}\")")]
    UnknownBlockType { id: String, type_name: String },
    #[error("block \"{id}\" has unreadable {block_type} props: {reason}")]
    InvalidProps {
        id: String,
        block_type: BlockType,
        reason: String,
    },
}

impl Diagnostic {
    pub fn block_id(&self) -> &str {
        match self {
            Diagnostic::UnknownBlockType { id, .. } | Diagnostic::InvalidProps { id, .. } => id,
        }
    }

    /// The offending `type` value.
    pub fn type_name(&self) -> &str {
        match self {
            Diagnostic::UnknownBlockType { type_name, .. } => type_name,
            Diagnostic::InvalidProps { block_type, .. } => block_type.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_block_message_names_the_type() {
        let diagnostic = Diagnostic::UnknownBlockType {
            id: "b".into(),
            type_name: "Bogus".into(),
        };
        assert_eq!(
            diagnostic.to_string(),
            "block type \"Bogus\" not found (block \"b\")"
        );
        assert_eq!(diagnostic.block_id(), "b");
        assert_eq!(diagnostic.type_name(), "Bogus");
    }

    #[test]
    fn serializes_with_kind_tag() {
        let diagnostic = Diagnostic::InvalidProps {
            id: "p".into(),
            block_type: BlockType::Cta,
            reason: "invalid type".into(),
        };
        let value = serde_json::to_value(&diagnostic).expect("serialize");
        assert_eq!(value["kind"], "invalid_props");
        assert_eq!(value["block_type"], "CTA");
        assert_eq!(value["id"], "p");
    }
}
