//! Inline content collection: comrak inline nodes to [`Segment`]s.
//!
//! Mark flags accumulate down the recursion (bold inside italic sets both),
//! and adjacent text leaves carrying identical flags coalesce into one leaf,
//! so a hard break never leaves a paragraph split into two text nodes.

use crate::tree::{Anchor, ImageInline, Segment, Text};
use comrak::nodes::{AstNode, NodeValue};

/// Style flags accumulated while walking inline nodes. `underline` has no
/// markdown token, so the parser never sets it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct MarkFlags {
    pub bold: bool,
    pub italic: bool,
    pub strike: bool,
    pub highlight: bool,
    pub code: bool,
}

impl MarkFlags {
    fn to_text(self, text: &str) -> Text {
        Text {
            text: text.to_string(),
            bold: self.bold,
            italic: self.italic,
            underline: false,
            strike: self.strike,
            highlight: self.highlight,
            code: self.code,
        }
    }

    fn matches(self, text: &Text) -> bool {
        text.bold == self.bold
            && text.italic == self.italic
            && !text.underline
            && text.strike == self.strike
            && text.highlight == self.highlight
            && text.code == self.code
    }
}

/// Collect the inline children of `node` into segments. Never returns an
/// empty list: an empty block yields a single empty text leaf.
pub(crate) fn collect_segments<'a>(node: &'a AstNode<'a>) -> Vec<Segment> {
    let mut segments = Vec::new();
    collect_into(node, MarkFlags::default(), &mut segments);
    if segments.is_empty() {
        segments.push(Segment::Text(Text::plain("")));
    }
    segments
}

/// Walk the inline children of `node`, appending segments. `<mark>` /
/// `</mark>` inline HTML toggles the highlight flag for the siblings that
/// follow it; any other inline HTML degrades to literal text.
pub(crate) fn collect_into<'a>(
    node: &'a AstNode<'a>,
    mut flags: MarkFlags,
    segments: &mut Vec<Segment>,
) {
    for child in node.children() {
        let data = child.data.borrow();
        match &data.value {
            NodeValue::Text(text) => push_text(segments, text, flags),
            NodeValue::SoftBreak | NodeValue::LineBreak => push_text(segments, "\n", flags),
            NodeValue::Code(code) => {
                push_text(segments, &code.literal, MarkFlags { code: true, ..flags })
            }
            NodeValue::Strong => collect_into(child, MarkFlags { bold: true, ..flags }, segments),
            NodeValue::Emph => collect_into(child, MarkFlags { italic: true, ..flags }, segments),
            NodeValue::Strikethrough => {
                collect_into(child, MarkFlags { strike: true, ..flags }, segments)
            }
            NodeValue::HtmlInline(html) => match html.trim() {
                "<mark>" => flags.highlight = true,
                "</mark>" => flags.highlight = false,
                other => push_text(segments, other, flags),
            },
            NodeValue::Link(link) => {
                // Marks wrapping the whole link stay on the link text.
                let mut children = Vec::new();
                collect_into(child, flags, &mut children);
                if children.is_empty() {
                    children.push(Segment::Text(Text::plain("")));
                }
                segments.push(Segment::Anchor(Anchor {
                    href: link.url.clone(),
                    title: non_empty(&link.title),
                    children,
                }));
            }
            NodeValue::Image(link) => {
                segments.push(Segment::ImageInline(ImageInline {
                    url: link.url.clone(),
                    alt: collect_text(child),
                    title: non_empty(&link.title),
                }));
            }
            NodeValue::FootnoteReference(reference) => {
                push_text(segments, &format!("[^{}]", reference.name), flags)
            }
            _ => {
                let fallback = collect_text(child);
                if !fallback.is_empty() {
                    push_text(segments, &fallback, flags);
                }
            }
        }
    }
}

/// Append text with the given flags, coalescing with the previous leaf when
/// the flags agree.
pub(crate) fn push_text(segments: &mut Vec<Segment>, text: &str, flags: MarkFlags) {
    if let Some(Segment::Text(last)) = segments.last_mut() {
        if flags.matches(last) {
            last.text.push_str(text);
            return;
        }
    }
    segments.push(Segment::Text(flags.to_text(text)));
}

/// Plain-text rendering of a node's content, used for image alt text and as
/// the degradation path for inline kinds without a segment form.
pub(crate) fn collect_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut out = String::new();
    collect_text_into(node, &mut out);
    out
}

fn collect_text_into<'a>(node: &'a AstNode<'a>, out: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(text) => out.push_str(text),
        NodeValue::Code(code) => out.push_str(&code.literal),
        NodeValue::SoftBreak | NodeValue::LineBreak => out.push(' '),
        _ => {
            for child in node.children() {
                collect_text_into(child, out);
            }
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
