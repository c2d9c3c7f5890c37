//! Markdown parsing (markdown text → element tree).
//!
//! Pipeline: markdown string → comrak AST → element tree. The grammar
//! engine collapses blank-line runs by design; they are recovered from the
//! source positions it keeps on every block node (see [`parse_contents`]).

mod blocks;
mod inline;

use crate::error::ConvertError;
use crate::tree::Element;
use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};

/// Parse a markdown string into an ordered list of elements.
///
/// Fails only when the grammar engine hands over a block node kind with no
/// parser branch, which indicates a configuration bug, never malformed user
/// input.
pub fn parse(markdown: &str) -> Result<Vec<Element>, ConvertError> {
    let arena = Arena::new();
    let options = default_comrak_options();
    let root = parse_document(&arena, markdown, &options);
    parse_contents(root.children())
}

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;
    options.extension.front_matter_delimiter = Some("---".to_string());
    options
}

/// Parse a run of sibling block nodes, recovering collapsed blank lines.
///
/// The engine keeps start/end source lines on every block node. A gap of
/// one line between consecutive blocks is the normal separator; every line
/// beyond that was a blank line the block parser discarded, and each one
/// becomes a synthetic empty paragraph.
pub(crate) fn parse_contents<'a, I>(children: I) -> Result<Vec<Element>, ConvertError>
where
    I: Iterator<Item = &'a AstNode<'a>>,
{
    let mut elements = Vec::new();
    let mut prev_end_line: Option<usize> = None;

    for node in children {
        let sourcepos = node.data.borrow().sourcepos;
        if let Some(prev_end) = prev_end_line {
            let gap = sourcepos.start.line.saturating_sub(prev_end + 1);
            for _ in 1..gap {
                elements.push(Element::empty_paragraph());
            }
        }
        prev_end_line = Some(sourcepos.end.line);
        elements.extend(parse_content(node)?);
    }

    Ok(elements)
}

/// Dispatch one block node to its parser.
///
/// Link and image reference definitions are resolved to inline nodes by the
/// engine before this stage, so no definition kind can surface here; any
/// block kind without a branch fails fast rather than being skipped.
fn parse_content<'a>(node: &'a AstNode<'a>) -> Result<Vec<Element>, ConvertError> {
    let data = node.data.borrow();
    match &data.value {
        NodeValue::BlockQuote => blocks::parse_block_quote(node),
        NodeValue::CodeBlock(code) => Ok(blocks::parse_code_block(code)),
        NodeValue::FootnoteDefinition(_) => blocks::parse_footnote_definition(node),
        NodeValue::Heading(heading) => Ok(blocks::parse_heading(node, heading.level)),
        NodeValue::HtmlBlock(html) => Ok(blocks::parse_html_block(html)),
        NodeValue::List(list) => blocks::parse_list(node, list, 0),
        NodeValue::Paragraph => Ok(blocks::parse_paragraph(node)),
        NodeValue::Table(table) => blocks::parse_table(node, table),
        NodeValue::ThematicBreak => Ok(vec![Element::HorizontalRule]),
        // YAML front matter is not a supported feature.
        NodeValue::FrontMatter(_) => Ok(vec![]),
        other => Err(ConvertError::UnsupportedBlock(format!("{other:?}"))),
    }
}
