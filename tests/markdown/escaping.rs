//! Escaping behavior through the public surface: URL-slash masking,
//! markdown unescaping, and escaped text surviving a parse/serialize cycle.

use treemark::{escape_url_slashes, parse, serialize, unescape_markdown, unescape_url_slashes};

#[test]
fn test_bare_url_slashes_are_escaped() {
    assert_eq!(
        escape_url_slashes("go https://example.com/path"),
        "go https:\\/\\/example.com\\/path"
    );
}

#[test]
fn test_link_urls_are_left_alone() {
    let input = "[x](https://example.com/path)";
    assert_eq!(escape_url_slashes(input), input);
}

#[test]
fn test_html_attribute_urls_are_left_alone() {
    let input = "<iframe src=\"https://x.com/y\"></iframe>";
    assert_eq!(escape_url_slashes(input), input);
}

#[test]
fn test_html_content_urls_are_left_alone() {
    let input = "<div>https://example.com/path</div>";
    assert_eq!(escape_url_slashes(input), input);
}

#[test]
fn test_unescape_url_slashes_is_the_inverse() {
    let escaped = escape_url_slashes("go https://example.com/path");
    assert_eq!(unescape_url_slashes(&escaped), "go https://example.com/path");
}

#[test]
fn test_unescape_markdown_targets() {
    assert_eq!(unescape_markdown("\\*bold\\*"), "*bold*");
    assert_eq!(unescape_markdown("\\\\"), "\\");
    assert_eq!(unescape_markdown("\\n"), "\\n");
    assert_eq!(unescape_markdown("C:\\Users"), "C:\\Users");
}

#[test]
fn test_special_characters_survive_a_round_trip() {
    // Serialization escapes; the grammar engine unescapes on reparse.
    for text in ["a*b", "a_b", "[brackets]", "# not a heading", "1. not a list", "> not a quote"] {
        let tree = vec![treemark::Element::Paragraph {
            children: vec![treemark::Segment::Text(treemark::Text::plain(text))],
        }];
        let serialized = serialize(&tree).unwrap();
        let parsed = parse(&serialized).unwrap();
        assert_eq!(parsed, tree, "round trip of {text:?} via {serialized:?}");
    }
}
