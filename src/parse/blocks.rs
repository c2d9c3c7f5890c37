//! Per-kind block parsers: comrak block nodes to [`Element`]s.

use crate::error::ConvertError;
use crate::parse::inline::{self, MarkFlags};
use crate::parse::parse_contents;
use crate::tree::{ColumnAlignment, Element, Segment, TableColumn, Text};
use comrak::nodes::{AstNode, ListType, NodeCodeBlock, NodeHtmlBlock, NodeList, NodeTable, NodeValue, TableAlignment};

/// A paragraph yields a plain paragraph, the canonical empty paragraph when
/// its sole content is the NBSP blank-line sentinel, or an image block when
/// an image is its only non-blank content.
pub(super) fn parse_paragraph<'a>(node: &'a AstNode<'a>) -> Vec<Element> {
    let segments = inline::collect_segments(node);

    let mut image = None;
    let mut image_only = true;
    for segment in &segments {
        match segment {
            Segment::ImageInline(inline) if image.is_none() => image = Some(inline.clone()),
            Segment::Text(text) if text.text.trim().is_empty() => {}
            _ => {
                image_only = false;
                break;
            }
        }
    }
    if image_only {
        if let Some(image) = image {
            return vec![Element::ImageBlock {
                url: image.url,
                alt: image.alt,
                title: image.title,
                width: None,
                height: None,
            }];
        }
    }

    if let [Segment::Text(text)] = segments.as_slice() {
        if text.is_plain() && text.text == "\u{00A0}" {
            return vec![Element::empty_paragraph()];
        }
    }

    vec![Element::Paragraph { children: segments }]
}

pub(super) fn parse_heading<'a>(node: &'a AstNode<'a>, level: u8) -> Vec<Element> {
    vec![Element::Heading {
        level,
        children: inline::collect_segments(node),
    }]
}

pub(super) fn parse_block_quote<'a>(node: &'a AstNode<'a>) -> Result<Vec<Element>, ConvertError> {
    let mut children = parse_contents(node.children())?;
    if children.is_empty() {
        children.push(Element::empty_paragraph());
    }
    Ok(vec![Element::BlockQuote { children }])
}

pub(super) fn parse_code_block(code: &NodeCodeBlock) -> Vec<Element> {
    let literal = code.literal.strip_suffix('\n').unwrap_or(&code.literal);
    vec![Element::CodeBlock {
        language: code.info.clone(),
        children: literal
            .split('\n')
            .map(|line| Element::CodeBlockLine {
                text: line.to_string(),
            })
            .collect(),
    }]
}

/// Raw HTML passes through verbatim; no interpretation, no sanitization.
pub(super) fn parse_html_block(html: &NodeHtmlBlock) -> Vec<Element> {
    vec![Element::HtmlBlock {
        html: html.literal.trim_end_matches('\n').to_string(),
    }]
}

/// Footnote definitions have no tree counterpart; their block children are
/// flattened into the surrounding element stream.
pub(super) fn parse_footnote_definition<'a>(
    node: &'a AstNode<'a>,
) -> Result<Vec<Element>, ConvertError> {
    parse_contents(node.children())
}

/// Lists flatten into a run of list-item elements carrying their nesting
/// depth; a nested list's items follow the item that contains it.
pub(super) fn parse_list<'a>(
    node: &'a AstNode<'a>,
    list: &NodeList,
    depth: usize,
) -> Result<Vec<Element>, ConvertError> {
    let ordered = matches!(list.list_type, ListType::Ordered);
    let mut elements = Vec::new();

    for item in node.children() {
        let checked = match &item.data.borrow().value {
            NodeValue::Item(_) => None,
            NodeValue::TaskItem(state) => Some(state.is_some()),
            other => {
                return Err(ConvertError::UnsupportedBlock(format!(
                    "{other:?} inside a list"
                )))
            }
        };

        let mut segments: Vec<Segment> = Vec::new();
        let mut nested: Vec<Element> = Vec::new();
        for child in item.children() {
            let data = child.data.borrow();
            match &data.value {
                // Multiple paragraphs in one item join with a soft break;
                // the flat item model has no room for block children.
                NodeValue::Paragraph => {
                    if !segments.is_empty() {
                        inline::push_text(&mut segments, "\n", MarkFlags::default());
                    }
                    inline::collect_into(child, MarkFlags::default(), &mut segments);
                }
                NodeValue::List(nested_list) => {
                    nested.extend(parse_list(child, nested_list, depth + 1)?)
                }
                NodeValue::CodeBlock(code) => inline::push_text(
                    &mut segments,
                    code.literal.trim_end_matches('\n'),
                    MarkFlags { code: true, ..MarkFlags::default() },
                ),
                _ => {
                    let fallback = inline::collect_text(child);
                    if !fallback.is_empty() {
                        inline::push_text(&mut segments, &fallback, MarkFlags::default());
                    }
                }
            }
        }

        let children = normalize_blank_item(segments);
        elements.push(match checked {
            Some(checked) => Element::TaskListItem {
                depth,
                checked,
                children,
            },
            None if ordered => Element::OrderedListItem { depth, children },
            None => Element::UnorderedListItem { depth, children },
        });
        elements.extend(nested);
    }

    Ok(elements)
}

/// An item whose content is only whitespace (including the decoded `&#32;`
/// placeholder a blank task item serializes as) canonicalizes to a single
/// empty text leaf.
fn normalize_blank_item(segments: Vec<Segment>) -> Vec<Segment> {
    let blank = segments
        .iter()
        .all(|segment| matches!(segment, Segment::Text(t) if t.is_plain() && t.text.trim().is_empty()));
    if segments.is_empty() || blank {
        vec![Segment::Text(Text::plain(""))]
    } else {
        segments
    }
}

pub(super) fn parse_table<'a>(
    node: &'a AstNode<'a>,
    table: &NodeTable,
) -> Result<Vec<Element>, ConvertError> {
    let columns = table
        .alignments
        .iter()
        .map(|alignment| TableColumn {
            align: match alignment {
                TableAlignment::Left => ColumnAlignment::Left,
                TableAlignment::Center => ColumnAlignment::Center,
                TableAlignment::Right => ColumnAlignment::Right,
                TableAlignment::None => ColumnAlignment::None,
            },
        })
        .collect();

    let mut rows = Vec::new();
    for row in node.children() {
        if !matches!(row.data.borrow().value, NodeValue::TableRow(_)) {
            return Err(ConvertError::UnsupportedBlock(
                "expected a table row inside a table".to_string(),
            ));
        }
        let mut cells = Vec::new();
        for cell in row.children() {
            if !matches!(cell.data.borrow().value, NodeValue::TableCell) {
                return Err(ConvertError::UnsupportedBlock(
                    "expected a table cell inside a table row".to_string(),
                ));
            }
            cells.push(Element::TableCell {
                children: vec![Element::TableContent {
                    children: inline::collect_segments(cell),
                }],
            });
        }
        rows.push(Element::TableRow { children: cells });
    }

    Ok(vec![Element::Table {
        columns,
        children: rows,
    }])
}
