//! Line serialization: inline segments to one markdown-safe line.

use crate::marks::{active_marks, marks_to_close_symbols, marks_to_open_symbols};
use crate::tree::{Anchor, Segment, Text};

pub(crate) fn serialize_line(segments: &[Segment]) -> String {
    segments.iter().map(serialize_segment).collect()
}

fn serialize_segment(segment: &Segment) -> String {
    match segment {
        Segment::Text(text) => serialize_text(text),
        Segment::Anchor(anchor) => serialize_anchor(anchor),
        Segment::ImageInline(image) => {
            serialize_image(&image.url, &image.alt, image.title.as_deref())
        }
    }
}

fn serialize_text(text: &Text) -> String {
    let marks = active_marks(text);
    let open = marks_to_open_symbols(&marks);
    let close = marks_to_close_symbols(&marks);
    // Backtick-fenced code must keep its literal content, so code text is
    // never escaped. The codec maps the code mark to empty tokens.
    let body = if text.code {
        format!("`{}`", text.text)
    } else {
        serialize_non_code_text(text)
    };
    format!("{open}{body}{close}")
}

/// Escape the text, then encode soft breaks as two trailing spaces plus a
/// newline so they survive as hard breaks on reparse.
fn serialize_non_code_text(text: &Text) -> String {
    crate::escape::escape_text(&text.text).replace('\n', "  \n")
}

/// The href is emitted raw; it was already escaped by the URL-slash layer
/// upstream.
fn serialize_anchor(anchor: &Anchor) -> String {
    let inner = serialize_line(&anchor.children);
    match anchor.title.as_deref() {
        Some(title) if !title.is_empty() => {
            format!("[{inner}]({} \"{title}\")", anchor.href)
        }
        _ => format!("[{inner}]({})", anchor.href),
    }
}

/// Shared image assembly for inline and block images. An image without a
/// url renders as nothing at all.
pub(crate) fn serialize_image(url: &str, alt: &str, title: Option<&str>) -> String {
    if url.is_empty() {
        return String::new();
    }
    match title {
        Some(title) if !title.is_empty() => format!("![{alt}]({url} \"{title}\")"),
        _ => format!("![{alt}]({url})"),
    }
}
