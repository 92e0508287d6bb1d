//! The document tree
//!
//!     ADF documents are JSON trees of typed nodes. Every node has a `type` tag and, depending
//!     on that tag, children (`content`), a text payload (`text`), formatting marks (`marks`)
//!     and a free-form attribute bag (`attrs`).
//!
//!     The tags are decoded into closed enums ([`NodeKind`], [`MarkKind`]) so the renderer can
//!     match on them exhaustively; tags outside the known set keep their original spelling in an
//!     `Unknown` variant.
//!
//!     Loading is strict at the root and lenient everywhere else: the root must be a `doc`, but
//!     a child with a missing tag, an unexpected attribute type or a `null` collection still
//!     decodes, and the renderer falls back to its defaults for it. The only other limit is
//!     nesting: trees deeper than [`MAX_DEPTH`] nodes are refused.

pub mod attrs;
pub mod loader;
pub mod node;

pub use attrs::Attrs;
pub use loader::{parse_document, MAX_DEPTH};
pub use node::{Mark, MarkKind, Node, NodeKind};
