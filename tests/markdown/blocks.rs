//! Block-level conversion tests: headings, quotes, lists, code, HTML,
//! rules and images.

use insta::assert_snapshot;
use treemark::{parse, serialize, Element, Segment, Text};

fn round_trip(input: &str) -> String {
    serialize(&parse(input).expect("parse")).expect("serialize")
}

#[test]
fn test_heading_round_trips() {
    assert_eq!(round_trip("## Title"), "## Title");
    assert_eq!(round_trip("###### Small"), "###### Small");
}

#[test]
fn test_block_quote_round_trips() {
    let input = "> a\n>\n> b";
    assert_eq!(round_trip(input), input);
}

#[test]
fn test_horizontal_rule_round_trips() {
    let input = "before\n\n---\n\nafter";
    assert_eq!(round_trip(input), input);
}

#[test]
fn test_code_block_round_trips() {
    let input = "```rust\nfn main() {}\n\nlet x = 1;\n```";
    let parsed = parse(input).unwrap();
    assert_eq!(
        parsed,
        vec![Element::CodeBlock {
            language: "rust".to_string(),
            children: vec![
                Element::CodeBlockLine {
                    text: "fn main() {}".to_string(),
                },
                Element::CodeBlockLine {
                    text: String::new(),
                },
                Element::CodeBlockLine {
                    text: "let x = 1;".to_string(),
                },
            ],
        }]
    );
    assert_eq!(serialize(&parsed).unwrap(), input);
}

#[test]
fn test_html_block_passes_through_verbatim() {
    let input = "<div>\n*not emphasis*\n</div>";
    let parsed = parse(input).unwrap();
    assert_eq!(
        parsed,
        vec![Element::HtmlBlock {
            html: input.to_string(),
        }]
    );
    assert_eq!(serialize(&parsed).unwrap(), input);
}

#[test]
fn test_unordered_list_nesting_round_trips() {
    let input = "- a\n    - b\n- c";
    assert_eq!(round_trip(input), input);
}

#[test]
fn test_ordered_list_numbering_round_trips() {
    let input = "1. one\n2. two\n    1. two.one\n3. three";
    assert_eq!(round_trip(input), input);
}

#[test]
fn test_task_list_round_trips() {
    let input = "- [x] done\n- [ ] todo";
    assert_eq!(round_trip(input), input);
}

#[test]
fn test_blank_task_item_keeps_its_checkbox_line() {
    let tree = vec![Element::TaskListItem {
        depth: 0,
        checked: false,
        children: vec![Segment::Text(Text::plain(""))],
    }];
    let serialized = serialize(&tree).unwrap();
    assert_eq!(serialized, "- [ ] &#32;");
    assert_eq!(parse(&serialized).unwrap(), tree);
}

#[test]
fn test_list_followed_by_paragraph_keeps_one_blank_line() {
    let input = "- item\n\nafter";
    assert_eq!(round_trip(input), input);
}

#[test]
fn test_image_only_paragraph_becomes_image_block_and_back() {
    let input = "![alt](https://example.com/a.png)";
    let parsed = parse(input).unwrap();
    assert!(matches!(parsed[0], Element::ImageBlock { .. }));
    assert_eq!(serialize(&parsed).unwrap(), input);
}

#[test]
fn test_image_with_trailing_text_stays_inline() {
    let parsed = parse("![alt](https://example.com/a.png) caption").unwrap();
    let Element::Paragraph { children } = &parsed[0] else {
        panic!("expected paragraph");
    };
    assert!(matches!(children[0], Segment::ImageInline(_)));
}

#[test]
fn test_footnote_definition_flattens_into_stream() {
    let parsed = parse("body[^1]\n\n[^1]: the note\n").unwrap();
    assert_eq!(parsed.len(), 2);
    assert!(matches!(parsed[1], Element::Paragraph { .. }));
}

#[test]
fn test_kitchen_sink_serializes_stably() {
    let parsed = parse("# Title\n\nSome **bold** text\n\n- one\n- two\n").unwrap();
    let serialized = serialize(&parsed).unwrap();
    assert_snapshot!(serialized, @r"
    # Title

    Some **bold** text

    - one
    - two
    ");
    // A second cycle must be a fixed point.
    assert_eq!(round_trip(&serialized), serialized);
}
