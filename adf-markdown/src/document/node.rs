//! Node and mark types of the document tree

use super::attrs::Attrs;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// The closed set of node types the renderer knows about.
///
/// Tags outside the set are kept verbatim in [`NodeKind::Unknown`] so the
/// renderer can name them in its placeholder output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    Doc,
    Paragraph,
    Text,
    Heading,
    BulletList,
    OrderedList,
    ListItem,
    TaskList,
    TaskItem,
    DecisionList,
    DecisionItem,
    CodeBlock,
    Rule,
    Blockquote,
    HardBreak,
    Panel,
    Mention,
    Emoji,
    Date,
    Status,
    MediaSingle,
    Media,
    Caption,
    Unknown(String),
}

impl NodeKind {
    /// The tag as it appears in the `type` field.
    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Doc => "doc",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Text => "text",
            NodeKind::Heading => "heading",
            NodeKind::BulletList => "bulletList",
            NodeKind::OrderedList => "orderedList",
            NodeKind::ListItem => "listItem",
            NodeKind::TaskList => "taskList",
            NodeKind::TaskItem => "taskItem",
            NodeKind::DecisionList => "decisionList",
            NodeKind::DecisionItem => "decisionItem",
            NodeKind::CodeBlock => "codeBlock",
            NodeKind::Rule => "rule",
            NodeKind::Blockquote => "blockquote",
            NodeKind::HardBreak => "hardBreak",
            NodeKind::Panel => "panel",
            NodeKind::Mention => "mention",
            NodeKind::Emoji => "emoji",
            NodeKind::Date => "date",
            NodeKind::Status => "status",
            NodeKind::MediaSingle => "mediaSingle",
            NodeKind::Media => "media",
            NodeKind::Caption => "caption",
            NodeKind::Unknown(tag) => tag,
        }
    }

    /// Lists whose rendered block keeps its own trailing newlines when nested
    /// inside a list item.
    pub fn is_nestable_list(&self) -> bool {
        matches!(
            self,
            NodeKind::BulletList | NodeKind::OrderedList | NodeKind::TaskList
        )
    }
}

impl From<&str> for NodeKind {
    fn from(tag: &str) -> Self {
        match tag {
            "doc" => NodeKind::Doc,
            "paragraph" => NodeKind::Paragraph,
            "text" => NodeKind::Text,
            "heading" => NodeKind::Heading,
            "bulletList" => NodeKind::BulletList,
            "orderedList" => NodeKind::OrderedList,
            "listItem" => NodeKind::ListItem,
            "taskList" => NodeKind::TaskList,
            "taskItem" => NodeKind::TaskItem,
            "decisionList" => NodeKind::DecisionList,
            "decisionItem" => NodeKind::DecisionItem,
            "codeBlock" => NodeKind::CodeBlock,
            "rule" => NodeKind::Rule,
            "blockquote" => NodeKind::Blockquote,
            "hardBreak" => NodeKind::HardBreak,
            "panel" => NodeKind::Panel,
            "mention" => NodeKind::Mention,
            "emoji" => NodeKind::Emoji,
            "date" => NodeKind::Date,
            "status" => NodeKind::Status,
            "mediaSingle" => NodeKind::MediaSingle,
            "media" => NodeKind::Media,
            "caption" => NodeKind::Caption,
            other => NodeKind::Unknown(other.to_string()),
        }
    }
}

impl From<String> for NodeKind {
    fn from(tag: String) -> Self {
        match NodeKind::from(tag.as_str()) {
            NodeKind::Unknown(_) => NodeKind::Unknown(tag),
            known => known,
        }
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Unknown(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl Default for NodeKind {
    fn default() -> Self {
        NodeKind::Unknown(String::new())
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formatting annotations understood on text nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MarkKind {
    Strong,
    Em,
    Code,
    Strike,
    Underline,
    Link,
    TextColor,
    BackgroundColor,
    Unknown(String),
}

impl MarkKind {
    pub fn as_str(&self) -> &str {
        match self {
            MarkKind::Strong => "strong",
            MarkKind::Em => "em",
            MarkKind::Code => "code",
            MarkKind::Strike => "strike",
            MarkKind::Underline => "underline",
            MarkKind::Link => "link",
            MarkKind::TextColor => "textColor",
            MarkKind::BackgroundColor => "backgroundColor",
            MarkKind::Unknown(tag) => tag,
        }
    }
}

impl From<String> for MarkKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "strong" => MarkKind::Strong,
            "em" => MarkKind::Em,
            "code" => MarkKind::Code,
            "strike" => MarkKind::Strike,
            "underline" => MarkKind::Underline,
            "link" => MarkKind::Link,
            "textColor" => MarkKind::TextColor,
            "backgroundColor" => MarkKind::BackgroundColor,
            _ => MarkKind::Unknown(tag),
        }
    }
}

impl From<MarkKind> for String {
    fn from(kind: MarkKind) -> Self {
        match kind {
            MarkKind::Unknown(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl Default for MarkKind {
    fn default() -> Self {
        MarkKind::Unknown(String::new())
    }
}

/// A formatting annotation attached to a text node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: MarkKind,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Attrs::is_empty"
    )]
    pub attrs: Attrs,
}

impl Mark {
    pub fn new(kind: MarkKind) -> Self {
        Mark {
            kind,
            attrs: Attrs::default(),
        }
    }

    /// A `link` mark pointing at `href`.
    pub fn link(href: impl Into<String>) -> Self {
        Mark::new(MarkKind::Link).with_attr("href", href.into())
    }

    pub fn with_attr(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.attrs.insert(key, value);
        self
    }
}

/// One element of the document tree.
///
/// Leaf payloads live in `text`, children in `content`. Every collection
/// decodes as empty when it is absent or `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub content: Vec<Node>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub text: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub marks: Vec<Mark>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Attrs::is_empty"
    )]
    pub attrs: Attrs,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Node {
            kind,
            version: None,
            content: Vec::new(),
            text: String::new(),
            marks: Vec::new(),
            attrs: Attrs::default(),
        }
    }

    /// A `text` leaf carrying `text`.
    pub fn text(text: impl Into<String>) -> Self {
        let mut node = Node::new(NodeKind::Text);
        node.text = text.into();
        node
    }

    pub fn with_content(mut self, content: Vec<Node>) -> Self {
        self.content = content;
        self
    }

    pub fn with_attr(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.attrs.insert(key, value);
        self
    }

    pub fn with_mark(mut self, mark: Mark) -> Self {
        self.marks.push(mark);
        self
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        let mut pending = vec![self];
        let mut count = 0;
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(&node.content);
        }
        count
    }

    /// Levels of nesting in this subtree; a node without children has depth 1.
    pub fn depth(&self) -> usize {
        let mut pending = vec![(self, 1)];
        let mut deepest = 0;
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.content.iter().map(|child| (child, depth + 1)));
        }
        deepest
    }
}

// Children are unlinked onto a work list so dropping a deep tree never recurses.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.content);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.content);
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
