//! Error types for loading and rendering documents

use thiserror::Error;

/// Errors raised while turning input text into a document tree.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input was empty or contained only whitespace
    #[error("empty JSON string")]
    Empty,
    /// The input is not JSON, or does not have the shape of a node tree
    #[error("error parsing ADF JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The root node is not a `doc`
    #[error("invalid ADF format: root node must be 'doc', got '{0}'")]
    InvalidRoot(String),
    /// The tree nests deeper than the loader accepts
    #[error("invalid ADF format: document nests {depth} levels deep, limit is {limit}")]
    TooDeep { depth: usize, limit: usize },
}

/// Errors raised by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// No document was handed to the renderer
    #[error("nil document")]
    NilDocument,
}

/// Either stage of a full text-to-Markdown conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}
