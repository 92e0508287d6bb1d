//! Loading fixtures and rejecting bad roots

use crate::common::load_fixture;
use adf_markdown::{parse_document, NodeKind, ParseError};

#[test]
fn test_kitchensink_loads_in_document_order() {
    let doc = parse_document(&load_fixture("kitchensink.json")).unwrap();
    let kinds: Vec<_> = doc.content.iter().map(|n| n.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::Heading,
            NodeKind::Paragraph,
            NodeKind::Paragraph,
            NodeKind::OrderedList,
            NodeKind::CodeBlock,
            NodeKind::TaskList,
            NodeKind::DecisionList,
            NodeKind::Panel,
            NodeKind::Blockquote,
            NodeKind::Rule,
            NodeKind::MediaSingle,
            NodeKind::Unknown("expand".to_string()),
        ]
    );
}

#[test]
fn test_numeric_attrs_read_as_numbers() {
    let doc = parse_document(&load_fixture("kitchensink.json")).unwrap();
    assert_eq!(doc.content[0].attrs.number("level"), Some(1.0));
    assert_eq!(doc.content[3].attrs.integer("order"), Some(1));
}

#[test]
fn test_empty_and_blank_inputs_are_rejected() {
    for input in ["", "   ", "\n\n"] {
        assert!(matches!(parse_document(input), Err(ParseError::Empty)));
    }
}

#[test]
fn test_invalid_json_is_rejected() {
    assert!(matches!(
        parse_document("{not json}"),
        Err(ParseError::Json(_))
    ));
}

#[test]
fn test_non_doc_root_is_rejected() {
    assert!(matches!(
        parse_document(r#"{"type":"notdoc"}"#),
        Err(ParseError::InvalidRoot(tag)) if tag == "notdoc"
    ));
    assert!(matches!(
        parse_document(r#"{"type":"paragraph","content":[]}"#),
        Err(ParseError::InvalidRoot(tag)) if tag == "paragraph"
    ));
}

#[test]
fn test_unknown_fields_are_ignored() {
    let doc = parse_document(
        r#"{"type":"doc","content":[{"type":"paragraph","localId":"p1","content":[]}],"extra":true}"#,
    )
    .unwrap();
    assert_eq!(doc.content.len(), 1);
}
