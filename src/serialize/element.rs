//! Block dispatch: one element to its markdown text.

use crate::error::ConvertError;
use crate::serialize::line::{serialize_image, serialize_line};
use crate::serialize::{serialize_elements, table};
use crate::tree::Element;

const LIST_INDENT_SIZE: usize = 4;

/// Serialize one block element. `orders` holds the running per-depth
/// ordered-list counters maintained by the driver; it is already updated for
/// this element.
///
/// The match is exhaustive over every element kind: adding a kind without a
/// branch fails compilation at this dispatch point.
pub(crate) fn serialize_element(
    element: &Element,
    orders: &[usize],
) -> Result<String, ConvertError> {
    match element {
        Element::Paragraph { children } => {
            let line = serialize_line(children);
            if line.is_empty() {
                // Blank-line sentinel: a bare NBSP survives the grammar
                // engine's blank-line collapsing as a one-character word.
                Ok("\u{00A0}\n\n".to_string())
            } else {
                Ok(format!("{line}\n\n"))
            }
        }

        Element::Heading { level, children } => Ok(format!(
            "{} {}\n\n",
            "#".repeat((*level).clamp(1, 6) as usize),
            serialize_line(children)
        )),

        Element::BlockQuote { children } => {
            let inner = serialize_elements(children)?;
            // ASCII-only trim: the NBSP sentinel is Unicode whitespace and
            // must survive on quoted blank paragraphs.
            let quoted: Vec<String> = inner
                .lines()
                .map(|line| {
                    format!("> {line}")
                        .trim_end_matches(|c: char| c.is_ascii_whitespace())
                        .to_string()
                })
                .collect();
            Ok(format!("{}\n\n", quoted.join("\n")))
        }

        Element::HorizontalRule => Ok("---\n\n".to_string()),

        Element::UnorderedListItem { depth, children } => Ok(format!(
            "{}- {}\n",
            " ".repeat(depth * LIST_INDENT_SIZE),
            serialize_line(children)
        )),

        Element::OrderedListItem { depth, children } => {
            let number = orders.get(*depth).copied().unwrap_or(1);
            Ok(format!(
                "{}{number}. {}\n",
                " ".repeat(depth * LIST_INDENT_SIZE),
                serialize_line(children)
            ))
        }

        Element::TaskListItem {
            depth,
            checked,
            children,
        } => {
            let line = serialize_line(children);
            // A blank checkbox line would collapse on reparse; the space
            // entity keeps it occupied.
            let line = if line.trim().is_empty() {
                "&#32;".to_string()
            } else {
                line
            };
            Ok(format!(
                "{}- [{}] {line}\n",
                " ".repeat(depth * LIST_INDENT_SIZE),
                if *checked { "x" } else { " " }
            ))
        }

        Element::Table { columns, children } => table::serialize_table(columns, children),

        Element::ImageBlock {
            url, alt, title, ..
        } => {
            let image = serialize_image(url, alt, title.as_deref());
            if image.is_empty() {
                Ok(String::new())
            } else {
                // Without the trailing blank line, content following the
                // image would be absorbed into its paragraph on reparse.
                Ok(format!("{image}\n\n"))
            }
        }

        Element::CodeBlock { language, children } => {
            let mut out = format!("```{language}\n");
            for child in children {
                match child {
                    Element::CodeBlockLine { text } => {
                        out.push_str(text);
                        out.push('\n');
                    }
                    other => {
                        return Err(ConvertError::InvalidStructure(format!(
                            "{} inside a code block",
                            other.kind()
                        )))
                    }
                }
            }
            out.push_str("```\n\n");
            Ok(out)
        }

        Element::HtmlBlock { html } => Ok(format!("{html}\n\n")),

        Element::TableRow { .. }
        | Element::TableCell { .. }
        | Element::TableContent { .. }
        | Element::CodeBlockLine { .. } => Err(ConvertError::InvalidStructure(format!(
            "{} outside its parent",
            element.kind()
        ))),
    }
}
