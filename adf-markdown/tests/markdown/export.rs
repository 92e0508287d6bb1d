//! Whole-document rendering

use crate::common::{doc, load_fixture, render_fixture, render_json};
use adf_markdown::{convert, parse_document, ConvertError, ParseError, RenderOptions, Renderer};
use insta::assert_snapshot;

#[test]
fn test_empty_document() {
    let markdown = render_json(r#"{"version":1,"type":"doc","content":[]}"#, RenderOptions::default());
    assert_eq!(markdown, "");
}

#[test]
fn test_simple_paragraph() {
    let markdown = render_json(
        r#"{"version":1,"type":"doc","content":[{"type":"paragraph","content":[{"type":"text","text":"Hello, world!"}]}]}"#,
        RenderOptions::default(),
    );
    assert_eq!(markdown, "Hello, world!\n\n");
}

#[test]
fn test_text_with_formatting() {
    let source = doc(&[
        r#"{"type":"paragraph","content":[{"type":"text","text":"Plain"},{"type":"text","text":"Bold","marks":[{"type":"strong"}]},{"type":"text","text":"Italic","marks":[{"type":"em"}]}]}"#,
    ]);
    assert_eq!(
        render_json(&source, RenderOptions::default()),
        "Plain**Bold***Italic*\n\n"
    );
}

#[test]
fn test_heading() {
    let source = doc(&[
        r#"{"type":"heading","attrs":{"level":2},"content":[{"type":"text","text":"Heading 2"}]}"#,
    ]);
    assert_eq!(render_json(&source, RenderOptions::default()), "## Heading 2\n\n");
}

#[test]
fn test_heading_level_is_clamped() {
    let heading = |level: &str| {
        doc(&[format!(
            r#"{{"type":"heading","attrs":{{"level":{level}}},"content":[{{"type":"text","text":"H"}}]}}"#
        )
        .as_str()])
    };
    assert_eq!(render_json(&heading("0"), RenderOptions::default()), "# H\n\n");
    assert_eq!(render_json(&heading("9"), RenderOptions::default()), "###### H\n\n");
    assert_eq!(render_json(&heading("-3"), RenderOptions::default()), "# H\n\n");
}

#[test]
fn test_bullet_list() {
    let source = doc(&[
        r#"{"type":"bulletList","content":[{"type":"listItem","content":[{"type":"paragraph","content":[{"type":"text","text":"Item 1"}]}]},{"type":"listItem","content":[{"type":"paragraph","content":[{"type":"text","text":"Item 2"}]}]}]}"#,
    ]);
    assert_eq!(
        render_json(&source, RenderOptions::default()),
        "* Item 1\n* Item 2\n"
    );
}

#[test]
fn test_code_block() {
    let source = doc(&[
        r#"{"type":"codeBlock","attrs":{"language":"go"},"content":[{"type":"text","text":"func main() {}"}]}"#,
    ]);
    assert_eq!(
        render_json(&source, RenderOptions::default()),
        "```go\nfunc main() {}\n```\n\n"
    );
}

#[test]
fn test_code_block_keeps_tabs_and_newlines() {
    let source = doc(&[
        r#"{"type":"codeBlock","attrs":{"language":"go"},"content":[{"type":"text","text":"func main() {\n\tfmt.Println(\"Hello\")\n}"}]}"#,
    ]);
    assert_eq!(
        render_json(&source, RenderOptions::default()),
        "```go\nfunc main() {\n\tfmt.Println(\"Hello\")\n}\n```\n\n"
    );
}

#[test]
fn test_task_item_done() {
    let source = doc(&[
        r#"{"type":"taskList","content":[{"type":"taskItem","attrs":{"state":"DONE"},"content":[{"type":"text","text":"done"}]}]}"#,
    ]);
    assert_eq!(render_json(&source, RenderOptions::default()), "- [x] done\n");
}

#[test]
fn test_non_doc_root_fails_conversion() {
    let err = convert(r#"{"type":"notdoc"}"#, RenderOptions::default()).unwrap_err();
    assert!(matches!(err, ConvertError::Parse(ParseError::InvalidRoot(_))));
}

#[test]
fn test_empty_input_fails_conversion() {
    let err = convert("", RenderOptions::default()).unwrap_err();
    assert!(matches!(err, ConvertError::Parse(ParseError::Empty)));
}

#[test]
fn test_rendering_is_deterministic() {
    let doc = parse_document(&load_fixture("kitchensink.json")).unwrap();
    let renderer = Renderer::default();
    let first = renderer.render(Some(&doc)).unwrap();
    let second = renderer.render(Some(&doc)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_renderer_is_shareable_across_threads() {
    let doc = parse_document(&load_fixture("kitchensink.json")).unwrap();
    let renderer = Renderer::default();
    let expected = renderer.render(Some(&doc)).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| renderer.render(Some(&doc)).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_unknown_node_placeholder() {
    let source = doc(&[r#"{"type":"layoutSection","content":[{"type":"paragraph"}]}"#]);
    assert_eq!(
        render_json(&source, RenderOptions::default()),
        "[Unsupported ADF Element: layoutSection]\n"
    );
}

#[test]
fn test_malformed_leaves_fall_back_to_defaults() {
    let source = doc(&[
        r#"{"type":"heading","attrs":{"level":"two"},"content":[{"type":"text","text":"H"}]}"#,
        r#"{"type":"paragraph","content":[{"type":"mention","attrs":{"id":42}},{"type":"date","attrs":{"timestamp":1582152559000}},{"type":"status"}]}"#,
        r#"{"type":"mediaSingle","content":[{"type":"media","attrs":{"type":"external"}}]}"#,
    ]);
    assert_eq!(
        render_json(&source, RenderOptions::default()),
        "# H\n\n@user:[Date][STATUS]\n\n[Image: image - Type: external]"
    );
}

#[test]
fn test_kitchensink() {
    let markdown = render_fixture("kitchensink.json", RenderOptions::default());
    assert_snapshot!(markdown, @r"
    # Release notes

    Shipped by @Ada Lovelace on [Date: 1582152559000] [DONE] 🎉

    Read the **[full changelog](https://example.com/changelog)** or the ~~old one~~.

    1. Install
    2. Configure
      * set `list_indent`

    ```toml
    [render]
    list_indent = 4
    ```

    - [x] Write tests
    - [ ] Tag the release
    - <D> Keep the CLI flags
    > **Panel (note)**
    > Config files are optional.



    > Less is more.



    ---

    ![diagram.png](/wiki/download/attachments/contentId-123/6e7c7f2c)
    _Architecture_[Unsupported ADF Element: expand]
    ");
}

#[test]
fn test_kitchensink_exact_tail() {
    let markdown = render_fixture("kitchensink.json", RenderOptions::default());
    assert!(markdown.ends_with("_Architecture_[Unsupported ADF Element: expand]\n"));
    assert!(markdown.starts_with("# Release notes\n\n"));
}
