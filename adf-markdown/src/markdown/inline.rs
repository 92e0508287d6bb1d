//! Text, marks and inline leaves

use crate::document::{Mark, MarkKind, Node};

pub(super) fn text(node: &Node) -> String {
    if node.text.is_empty() {
        return String::new();
    }
    node.marks
        .iter()
        .rev()
        .fold(node.text.clone(), |text, mark| apply_mark(mark, text))
}

fn apply_mark(mark: &Mark, text: String) -> String {
    match &mark.kind {
        MarkKind::Strong => format!("**{text}**"),
        MarkKind::Em => format!("*{text}*"),
        MarkKind::Code => format!("`{text}`"),
        MarkKind::Strike => format!("~~{text}~~"),
        MarkKind::Link => match mark.attrs.str("href") {
            Some(href) => format!("[{text}]({href})"),
            None => text,
        },
        // No Markdown equivalent.
        MarkKind::Underline | MarkKind::TextColor | MarkKind::BackgroundColor => text,
        MarkKind::Unknown(tag) => {
            tracing::debug!(mark = %tag, "ignoring unsupported mark");
            text
        }
    }
}

pub(super) fn hard_break() -> String {
    "  \n".to_string()
}

pub(super) fn mention(node: &Node) -> String {
    match node.attrs.str("text").filter(|text| !text.is_empty()) {
        Some(text) => format!("@{text}"),
        None => format!("@user:{}", node.attrs.str("id").unwrap_or("")),
    }
}

pub(super) fn emoji(node: &Node) -> String {
    node.attrs
        .str("text")
        .or_else(|| node.attrs.str("shortName"))
        .unwrap_or("")
        .to_string()
}

pub(super) fn date(node: &Node) -> String {
    match node.attrs.str("timestamp") {
        Some(timestamp) => format!("[Date: {timestamp}]"),
        None => "[Date]".to_string(),
    }
}

pub(super) fn status(node: &Node) -> String {
    match node.attrs.str("text") {
        Some(text) => format!("[{text}]"),
        None => "[STATUS]".to_string(),
    }
}

pub(super) fn unknown(tag: &str) -> String {
    tracing::debug!(node_type = %tag, "rendering unsupported node as placeholder");
    format!("[Unsupported ADF Element: {tag}]\n")
}
