//! Tree loader (JSON text → validated document root)

use super::node::{Node, NodeKind};
use crate::error::ParseError;
use serde::Deserialize;

/// Deepest tree accepted, counted in nodes from the root (the root is level 1).
pub const MAX_DEPTH: usize = 1000;

/// Parse JSON text into a document tree.
///
/// Only the root is validated: it must be a `doc`, and the tree may not nest
/// deeper than [`MAX_DEPTH`] nodes. Anything below it is accepted as-is and
/// left to the renderer's defaults.
pub fn parse_document(source: &str) -> Result<Node, ParseError> {
    if source.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let root = decode(source)?;

    if root.kind != NodeKind::Doc {
        return Err(ParseError::InvalidRoot(root.kind.to_string()));
    }

    let depth = root.depth();
    if depth > MAX_DEPTH {
        return Err(ParseError::TooDeep {
            depth,
            limit: MAX_DEPTH,
        });
    }

    tracing::debug!(nodes = root.subtree_len(), depth, "parsed ADF document");
    Ok(root)
}

// serde_json stops at 128 nested containers and every tree level costs two of them,
// so the decoder runs unbounded on a growable stack and depth is checked in nodes.
fn decode(source: &str) -> Result<Node, serde_json::Error> {
    let mut deserializer = serde_json::Deserializer::from_str(source);
    deserializer.disable_recursion_limit();
    let root = Node::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(root)
}
