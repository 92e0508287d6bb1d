//! Markdown rendering (ADF tree → Markdown text)
//!
//! The renderer is a single recursive dispatcher: every node renders to a `String`, containers
//! concatenate or decorate what their children return. There is no renderer state besides the
//! immutable [`RenderOptions`], so a [`Renderer`] can be shared freely and rendering the same
//! tree twice always yields the same bytes.
//!
//! # Element Mapping Table
//!
//! | ADF Node       | Markdown Output                          | Notes                                        |
//! |----------------|------------------------------------------|----------------------------------------------|
//! | doc            | children                                 |                                              |
//! | paragraph      | children + blank line                    | nothing at all when the children are empty   |
//! | heading        | `#`×level + space + children             | level defaults to 1, clamped to 1..=6        |
//! | bulletList     | `* item` lines                           | list block ends with one extra newline       |
//! | orderedList    | `n. item` lines                          | numbering starts at `order` (default 1)      |
//! | taskList       | `- [ ] item` / `- [x] item`              | `state == "DONE"` checks the box             |
//! | decisionList   | `- < > item` / `- <D> item`              | `state == "DECIDED"` marks the decision      |
//! | codeBlock      | fenced block with language info string   | raw text of the first child, marks ignored   |
//! | rule           | `---`                                    |                                              |
//! | blockquote     | `> ` on every non-empty line             |                                              |
//! | panel          | `> **Panel (type)**` then quoted body    |                                              |
//! | hardBreak      | two spaces + newline                     |                                              |
//! | mention        | `@text` or `@user:id`                    |                                              |
//! | emoji          | `text` or `shortName`                    |                                              |
//! | date           | `[Date: timestamp]`                      |                                              |
//! | status         | `[text]`                                 |                                              |
//! | mediaSingle    | media, then caption on the next line     |                                              |
//! | media          | `![alt](url)`                            | attachment URL built from collection and id  |
//! | caption        | `_children_`                             |                                              |
//! | other          | `[Unsupported ADF Element: type]`        |                                              |
//!
//! # Marks
//!
//! Marks are folded from the last to the first, each one wrapping what the previous fold
//! produced, so the first declared mark ends up outermost. `underline`, `textColor`,
//! `backgroundColor` and unknown marks have no Markdown equivalent and leave the text as-is.
//!
//! # Indentation
//!
//! List, task and decision items put their first block on the marker line and indent every
//! non-empty continuation line by [`RenderOptions::list_indent`] spaces. Nested lists are
//! indented the same way, which is how arbitrarily deep nesting is reached: each level adds
//! its own indent to the already-indented output of the level below.

mod blocks;
mod inline;
mod lists;

use crate::document::{Node, NodeKind};
use crate::error::RenderError;

// Recursion follows tree depth; the stack grows in segments once less than the red zone is left.
const STACK_RED_ZONE: usize = 64 * 1024;
const STACK_SEGMENT: usize = 1024 * 1024;

/// Continuation-line indent used when none is configured.
pub const DEFAULT_LIST_INDENT: usize = 2;

/// Knobs for the Markdown output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces prefixed to continuation lines of list, task and decision items
    pub list_indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            list_indent: DEFAULT_LIST_INDENT,
        }
    }
}

/// Renders document trees as Markdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Renderer { options }
    }

    /// Builder form of [`Renderer::new`] for call sites that already hold a renderer,
    /// e.g. `Renderer::default().with_options(..)`. Options are replaced wholesale.
    pub fn with_options(self, options: RenderOptions) -> Self {
        Renderer { options }
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Render a whole document.
    ///
    /// Fails only when there is no document; every node shape below the root renders to
    /// something.
    pub fn render(&self, doc: Option<&Node>) -> Result<String, RenderError> {
        let doc = doc.ok_or(RenderError::NilDocument)?;
        Ok(self.render_node(doc))
    }

    /// Render a single node and its subtree.
    pub fn render_node(&self, node: &Node) -> String {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT, || self.dispatch(node))
    }

    fn dispatch(&self, node: &Node) -> String {
        match &node.kind {
            NodeKind::Doc => self.render_children(&node.content),
            NodeKind::Paragraph => self.paragraph(node),
            NodeKind::Text => inline::text(node),
            NodeKind::Heading => self.heading(node),
            NodeKind::BulletList => self.bullet_list(node) + "\n",
            NodeKind::OrderedList => self.ordered_list(node) + "\n",
            NodeKind::ListItem => self.list_item(node),
            NodeKind::TaskList => self.task_list(node) + "\n",
            NodeKind::TaskItem => self.task_item(node),
            NodeKind::DecisionList => self.decision_list(node) + "\n",
            NodeKind::DecisionItem => self.decision_item(node),
            NodeKind::CodeBlock => blocks::code_block(node),
            NodeKind::Rule => blocks::rule(),
            NodeKind::Blockquote => self.blockquote(node),
            NodeKind::HardBreak => inline::hard_break(),
            NodeKind::Panel => self.panel(node),
            NodeKind::Mention => inline::mention(node),
            NodeKind::Emoji => inline::emoji(node),
            NodeKind::Date => inline::date(node),
            NodeKind::Status => inline::status(node),
            NodeKind::MediaSingle => self.media_single(node),
            NodeKind::Media => blocks::media(node),
            NodeKind::Caption => self.caption(node),
            NodeKind::Unknown(tag) => inline::unknown(tag),
        }
    }

    fn render_children(&self, nodes: &[Node]) -> String {
        nodes.iter().map(|node| self.render_node(node)).collect()
    }
}

/// Strip one trailing blank line, the spacing a block element leaves behind.
fn strip_block_spacing(text: &str) -> &str {
    text.strip_suffix("\n\n").unwrap_or(text)
}

/// Prefix every non-empty line of `text`, leaving the first `skip` lines alone.
fn prefix_lines(text: &str, prefix: &str, skip: usize) -> String {
    text.split('\n')
        .enumerate()
        .map(|(i, line)| {
            if i < skip || line.is_empty() {
                line.to_string()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
