//! GFM pipe-table rendering.

use crate::error::ConvertError;
use crate::serialize::line::serialize_line;
use crate::tree::{ColumnAlignment, Element, TableColumn};

/// Render a table as a GFM pipe table: first row, alignment separator row,
/// remaining rows. Children that are not the row/cell/content chain are a
/// structural invariant violation.
pub(crate) fn serialize_table(
    columns: &[TableColumn],
    children: &[Element],
) -> Result<String, ConvertError> {
    let mut out = String::new();
    for (index, row) in children.iter().enumerate() {
        let Element::TableRow { children: cells } = row else {
            return Err(ConvertError::InvalidStructure(format!(
                "{} inside a table",
                row.kind()
            )));
        };
        out.push_str(&render_row(cells)?);
        if index == 0 {
            out.push_str(&render_separator(columns));
        }
    }
    out.push('\n');
    Ok(out)
}

fn render_row(cells: &[Element]) -> Result<String, ConvertError> {
    let mut out = String::from("|");
    for cell in cells {
        let Element::TableCell { children } = cell else {
            return Err(ConvertError::InvalidStructure(format!(
                "{} inside a table row",
                cell.kind()
            )));
        };
        let mut lines = Vec::with_capacity(children.len());
        for content in children {
            let Element::TableContent { children: segments } = content else {
                return Err(ConvertError::InvalidStructure(format!(
                    "{} inside a table cell",
                    content.kind()
                )));
            };
            lines.push(serialize_line(segments));
        }
        out.push_str(&format!(" {} |", lines.join(" ")));
    }
    out.push('\n');
    Ok(out)
}

fn render_separator(columns: &[TableColumn]) -> String {
    let mut out = String::from("|");
    for column in columns {
        out.push_str(match column.align {
            ColumnAlignment::Left => " :--- |",
            ColumnAlignment::Center => " :---: |",
            ColumnAlignment::Right => " ---: |",
            ColumnAlignment::None => " --- |",
        });
    }
    out.push('\n');
    out
}
