//! Fixture helpers shared by the integration tests

use adf_markdown::{parse_document, RenderOptions, Renderer};
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("fixture {name} should be readable: {e}"))
}

/// Parse and render `source`, panicking on either failure.
pub fn render_json(source: &str, options: RenderOptions) -> String {
    let doc = parse_document(source).expect("document to parse");
    Renderer::new(options)
        .render(Some(&doc))
        .expect("document to render")
}

pub fn render_fixture(name: &str, options: RenderOptions) -> String {
    render_json(&load_fixture(name), options)
}

/// Wrap block nodes (as JSON text) into a document.
pub fn doc(blocks: &[&str]) -> String {
    format!(
        r#"{{"version":1,"type":"doc","content":[{}]}}"#,
        blocks.join(",")
    )
}

pub fn indent(list_indent: usize) -> RenderOptions {
    RenderOptions { list_indent }
}
