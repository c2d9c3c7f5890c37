//! Core data structures for the element tree.
//!
//! The tree mirrors the host editor's document model: an ordered forest of
//! typed block nodes whose leaves are inline segments. The serde
//! representation is internally tagged with `type` and kebab-case kind names
//! so the JSON form of a tree is exactly the shape the host editor stores.

use serde::{Deserialize, Serialize};

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// A block-level node in the document tree.
///
/// `TableRow`, `TableCell`, `TableContent` and `CodeBlockLine` exist only as
/// children of their parent kind (`Table`, `CodeBlock`). The editing
/// framework works on a uniform node tree, so the type system cannot rule
/// out misplacements; the serializer raises
/// [`ConvertError::InvalidStructure`](crate::ConvertError) when it meets one
/// at a dispatch point it must not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Element {
    Paragraph {
        children: Vec<Segment>,
    },
    Heading {
        level: u8,
        children: Vec<Segment>,
    },
    BlockQuote {
        children: Vec<Element>,
    },
    UnorderedListItem {
        depth: usize,
        children: Vec<Segment>,
    },
    OrderedListItem {
        depth: usize,
        children: Vec<Segment>,
    },
    TaskListItem {
        depth: usize,
        checked: bool,
        children: Vec<Segment>,
    },
    Table {
        columns: Vec<TableColumn>,
        children: Vec<Element>,
    },
    TableRow {
        children: Vec<Element>,
    },
    TableCell {
        children: Vec<Element>,
    },
    TableContent {
        children: Vec<Segment>,
    },
    CodeBlock {
        language: String,
        children: Vec<Element>,
    },
    CodeBlockLine {
        text: String,
    },
    /// Opaque raw HTML. Never interpreted, never escaped; a void node.
    HtmlBlock {
        html: String,
    },
    HorizontalRule,
    /// Block-level image; a void node. `width`/`height` are carried for the
    /// host UI and are not encoded into markdown.
    ImageBlock {
        url: String,
        alt: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        width: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        height: Option<u32>,
    },
}

impl Element {
    /// The kebab-case kind name, as used in the serde representation.
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Paragraph { .. } => "paragraph",
            Element::Heading { .. } => "heading",
            Element::BlockQuote { .. } => "block-quote",
            Element::UnorderedListItem { .. } => "unordered-list-item",
            Element::OrderedListItem { .. } => "ordered-list-item",
            Element::TaskListItem { .. } => "task-list-item",
            Element::Table { .. } => "table",
            Element::TableRow { .. } => "table-row",
            Element::TableCell { .. } => "table-cell",
            Element::TableContent { .. } => "table-content",
            Element::CodeBlock { .. } => "code-block",
            Element::CodeBlockLine { .. } => "code-block-line",
            Element::HtmlBlock { .. } => "html-block",
            Element::HorizontalRule => "horizontal-rule",
            Element::ImageBlock { .. } => "image-block",
        }
    }

    /// The canonical empty paragraph: one empty text leaf, never zero
    /// children. This is the tree form of a blank line.
    pub fn empty_paragraph() -> Element {
        Element::Paragraph {
            children: vec![Segment::Text(Text::plain(""))],
        }
    }

    /// Whether this element is one of the three list-item kinds.
    pub fn is_list_item(&self) -> bool {
        matches!(
            self,
            Element::UnorderedListItem { .. }
                | Element::OrderedListItem { .. }
                | Element::TaskListItem { .. }
        )
    }
}

/// Column metadata for a [`Element::Table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumn {
    pub align: ColumnAlignment,
}

/// Alignment of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnAlignment {
    Left,
    Center,
    Right,
    None,
}

/// Inline content: a text leaf or an inline embed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Segment {
    Anchor(Anchor),
    ImageInline(ImageInline),
    Text(Text),
}

/// A text leaf with character-level style flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Text {
    pub text: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub strike: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub highlight: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub code: bool,
}

impl Text {
    /// A text leaf with no marks.
    pub fn plain(text: impl Into<String>) -> Text {
        Text {
            text: text.into(),
            ..Text::default()
        }
    }

    /// Whether no mark flags are set.
    pub fn is_plain(&self) -> bool {
        !(self.bold || self.italic || self.underline || self.strike || self.highlight || self.code)
    }
}

/// An inline link; its children are the link text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub children: Vec<Segment>,
}

/// An inline image; a void node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageInline {
    pub url: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}
