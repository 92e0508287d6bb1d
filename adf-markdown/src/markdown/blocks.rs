//! Block-level elements and media

use super::{prefix_lines, Renderer};
use crate::document::{Node, NodeKind};

const ATTACHMENT_PATH: &str = "/wiki/download/attachments";

impl Renderer {
    pub(super) fn paragraph(&self, node: &Node) -> String {
        let content = self.render_children(&node.content);
        if content.is_empty() {
            return content;
        }
        content + "\n\n"
    }

    pub(super) fn heading(&self, node: &Node) -> String {
        let level = node.attrs.integer("level").unwrap_or(1).clamp(1, 6) as usize;
        format!(
            "{} {}\n\n",
            "#".repeat(level),
            self.render_children(&node.content)
        )
    }

    pub(super) fn blockquote(&self, node: &Node) -> String {
        let content = self.render_children(&node.content);
        prefix_lines(&content, "> ", 0) + "\n\n"
    }

    pub(super) fn panel(&self, node: &Node) -> String {
        let panel_type = node.attrs.str("panelType").unwrap_or("");
        let title = format!("**Panel ({panel_type})**");

        let content = self.render_children(&node.content);
        let body = if content.is_empty() {
            title
        } else {
            format!("{title}\n{content}")
        };

        prefix_lines(&body, "> ", 0) + "\n\n"
    }

    /// A media node optionally followed by its caption.
    pub(super) fn media_single(&self, node: &Node) -> String {
        let mut out = String::new();

        if let Some(first) = node.content.first().filter(|n| n.kind == NodeKind::Media) {
            out.push_str(&media(first));
        }

        if let Some(caption) = node.content.get(1).filter(|n| n.kind == NodeKind::Caption) {
            let caption = self.caption(caption);
            if !caption.is_empty() {
                out.push('\n');
                out.push_str(&caption);
            }
        }

        out
    }

    pub(super) fn caption(&self, node: &Node) -> String {
        format!("_{}_", self.render_children(&node.content))
    }
}

/// Fenced code block. The body is the raw text of the first child, so marks on it never leak
/// into the fence.
pub(super) fn code_block(node: &Node) -> String {
    let language = node.attrs.str("language").unwrap_or("");
    let code = node.content.first().map_or("", |child| child.text.as_str());
    format!("```{language}\n{code}\n```\n\n")
}

pub(super) fn rule() -> String {
    "---\n\n".to_string()
}

pub(super) fn media(node: &Node) -> String {
    let media_type = node.attrs.str("type").unwrap_or("");
    let alt = node
        .attrs
        .str("alt")
        .filter(|alt| !alt.is_empty())
        .unwrap_or("image");

    let url = if media_type == "external" {
        node.attrs.str("url").unwrap_or("").to_string()
    } else {
        let collection = node.attrs.str("collection").unwrap_or("");
        let id = node.attrs.str("id").unwrap_or("");
        format!("{ATTACHMENT_PATH}/{collection}/{id}")
    };

    if url.is_empty() {
        return format!("[Image: {alt} - Type: {media_type}]");
    }
    format!("![{alt}]({url})")
}
