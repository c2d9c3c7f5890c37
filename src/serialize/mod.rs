//! Markdown serialization (element tree → markdown text).
//!
//! The driver walks the element list once, maintaining the per-depth
//! ordered-list counters, closing list runs with a blank line, and applying
//! the final margin trim that keeps the NBSP blank-line sentinel intact.

mod element;
mod line;
mod table;

use crate::error::ConvertError;
use crate::tree::Element;
use element::serialize_element;

/// Serialize an ordered list of elements to markdown.
///
/// Fails only when a child-only element kind (table rows/cells/content,
/// code-block lines) appears outside its parent. An effectively empty
/// document serializes to `""`.
pub fn serialize(elements: &[Element]) -> Result<String, ConvertError> {
    serialize_elements(elements)
}

pub(crate) fn serialize_elements(elements: &[Element]) -> Result<String, ConvertError> {
    let mut orders: Vec<usize> = Vec::new();
    let mut out = String::new();

    for (index, element) in elements.iter().enumerate() {
        update_orders(&mut orders, element);
        out.push_str(&serialize_element(element, &orders)?);

        // List items end with a single newline; the last item of a run gets
        // a second one so the list and what follows stay separate blocks.
        if element.is_list_item() {
            let next_is_item = elements
                .get(index + 1)
                .is_some_and(|next| next.is_list_item());
            if !next_is_item {
                out.push('\n');
            }
        }
    }

    if out.chars().all(|c| c.is_ascii_whitespace()) {
        return Ok(String::new());
    }

    // ASCII-only margin trim; a leading or trailing NBSP sentinel is content.
    Ok(out
        .trim_start_matches('\n')
        .trim_end_matches(|c: char| c.is_ascii_whitespace())
        .to_string())
}

/// List numbering is never stored on the tree; it is reconstructed from the
/// contiguous run of list items. An ordered item increments its depth's
/// counter and drops deeper counters; other item kinds drop counters at and
/// below their depth; any non-list element resets everything.
fn update_orders(orders: &mut Vec<usize>, element: &Element) {
    match element {
        Element::OrderedListItem { depth, .. } => {
            if orders.len() <= *depth {
                orders.resize(depth + 1, 0);
            }
            orders[*depth] += 1;
            orders.truncate(depth + 1);
        }
        Element::UnorderedListItem { depth, .. } | Element::TaskListItem { depth, .. } => {
            orders.truncate(*depth);
        }
        _ => orders.clear(),
    }
}
