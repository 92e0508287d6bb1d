//! Markdown rendering for Atlassian Document Format (ADF) documents
//!
//!     This crate turns ADF, the JSON rich-text tree used by Jira and Confluence, into plain
//!     Markdown for display, search indexing or export.
//!
//!     This is a pure lib, that is, it powers the adf2md CLI but is shell agnostic: no code here
//!     reads files, environment variables or prints to std streams.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # ParseError, RenderError, ConvertError
//!     ├── document                # The tree
//!     │   ├── node.rs             # Node, Mark and their closed kind enums
//!     │   ├── attrs.rs            # Lenient attribute bag
//!     │   └── loader.rs           # JSON text → validated root
//!     ├── markdown                # The renderer
//!     │   ├── mod.rs              # Renderer, options and the node dispatch
//!     │   ├── blocks.rs           # Paragraphs, headings, quotes, panels, code, media
//!     │   ├── inline.rs           # Text with marks and inline leaves
//!     │   └── lists.rs            # Lists, items and continuation indentation
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── lib.rs                  # gathers the per-area modules below
//!     ├── common                  # fixture loading
//!     ├── document                # loader behaviour on whole inputs
//!     ├── markdown                # rendering, per element family
//!     └── fixtures                # ADF documents (.json)
//!
//! Pipeline
//!
//!     text ──parse_document──▶ Node (root `doc`) ──Renderer::render──▶ Markdown
//!
//!     The loader is strict only about the root; everything below it degrades to documented
//!     defaults in the renderer, so one malformed leaf never costs the whole document.
//!
//!     The conversion is one-directional. There is no Markdown → ADF path.

pub mod document;
pub mod error;
pub mod markdown;

pub use document::{parse_document, Attrs, Mark, MarkKind, Node, NodeKind, MAX_DEPTH};
pub use error::{ConvertError, ParseError, RenderError};
pub use markdown::{RenderOptions, Renderer, DEFAULT_LIST_INDENT};

/// Parse ADF JSON text and render it as Markdown in one go.
pub fn convert(source: &str, options: RenderOptions) -> Result<String, ConvertError> {
    let doc = parse_document(source)?;
    let markdown = Renderer::new(options).render(Some(&doc))?;
    Ok(markdown)
}
