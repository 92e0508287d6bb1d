//! Lists, task lists and decision lists
//!
//! Every list joins its items with single newlines; the dispatcher adds the one extra newline
//! that closes the list block. Items are rendered by the item rule of their list whatever their
//! own tag says, mirroring how the list owns the marker.

use super::{prefix_lines, strip_block_spacing, Renderer};
use crate::document::Node;

impl Renderer {
    pub(super) fn bullet_list(&self, node: &Node) -> String {
        join_items(&node.content, |_, item| format!("* {}", self.list_item(item)))
    }

    pub(super) fn ordered_list(&self, node: &Node) -> String {
        let start = node.attrs.integer("order").unwrap_or(1);
        join_items(&node.content, |i, item| {
            let number = start.saturating_add(i as i64);
            format!("{number}. {}", self.list_item(item))
        })
    }

    pub(super) fn task_list(&self, node: &Node) -> String {
        join_items(&node.content, |_, item| format!("- {}", self.task_item(item)))
    }

    pub(super) fn decision_list(&self, node: &Node) -> String {
        join_items(&node.content, |_, item| {
            format!("- {}", self.decision_item(item))
        })
    }

    /// The first child sits on the marker line; every later child becomes an indented block
    /// of its own. Nested lists keep their closing newline, other blocks lose their blank line.
    pub(super) fn list_item(&self, node: &Node) -> String {
        let Some((first, rest)) = node.content.split_first() else {
            return "\n".to_string();
        };

        let mut out = strip_block_spacing(&self.render_node(first)).to_string();
        let indent = self.indent();

        for child in rest {
            let rendered = self.render_node(child);
            let block = if child.kind.is_nestable_list() {
                rendered.as_str()
            } else {
                strip_block_spacing(&rendered)
            };
            out.push('\n');
            out.push_str(&prefix_lines(block, &indent, 0));
        }

        out
    }

    pub(super) fn task_item(&self, node: &Node) -> String {
        let checkbox = match node.attrs.str("state") {
            Some("DONE") => "[x]",
            _ => "[ ]",
        };
        format!("{checkbox} {}", self.item_body(node))
    }

    pub(super) fn decision_item(&self, node: &Node) -> String {
        let marker = match node.attrs.str("state") {
            Some("DECIDED") => "<D>",
            _ => "< >",
        };
        format!("{marker} {}", self.item_body(node))
    }

    /// Task and decision bodies: children run together, continuation lines indented.
    fn item_body(&self, node: &Node) -> String {
        let content = self.render_children(&node.content);
        prefix_lines(strip_block_spacing(&content), &self.indent(), 1)
    }

    fn indent(&self) -> String {
        " ".repeat(self.options.list_indent)
    }
}

fn join_items(items: &[Node], mut render: impl FnMut(usize, &Node) -> String) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| render(i, item))
        .collect::<Vec<_>>()
        .join("\n")
}
