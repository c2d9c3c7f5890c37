//! Bidirectional Markdown ⇄ element-tree conversion for WYSIWYG editing
//!
//!     This crate converts between plain markdown text and the typed element
//!     tree a WYSIWYG editor edits in place. The two entry points are
//!     parse() (markdown → elements) and serialize() (elements → markdown);
//!     both are total over well-formed input and only fail on structural
//!     bugs upstream (see ./error.rs).
//!
//!     This is a pure lib, that is, it powers a host editor but is shell
//!     agnostic, that is no code should be written that supposes a shell
//!     environment, be it to std print, env vars etc.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # ConvertError
//!     ├── tree.rs                 # Element / Segment data model
//!     ├── marks.rs                # mark ⇄ markdown token codec
//!     ├── escape.rs               # text escaping + URL-slash masking
//!     ├── parse
//!     │   ├── mod.rs              # comrak pipeline, blank-line recovery
//!     │   ├── blocks.rs           # per-kind block parsers
//!     │   └── inline.rs           # segment collection, mark flags
//!     ├── serialize
//!     │   ├── mod.rs              # driver, list numbering, margin trim
//!     │   ├── element.rs          # block dispatch
//!     │   ├── line.rs             # inline segments → one markdown line
//!     │   └── table.rs            # GFM pipe tables
//!     └── lib.rs
//!
//! Core Algorithms
//!
//!     The hard part is the round trip. Markdown's block grammar discards
//!     information interactive editing needs back: runs of blank lines,
//!     soft breaks inside a paragraph, slashes in bare URLs. Three
//!     cross-cutting encodings recover it, enforced by parser and
//!     serializer together:
//!     - an empty paragraph serializes as a lone NBSP (U+00A0) "word" and
//!       parses back to the canonical empty paragraph;
//!     - extra blank lines collapsed by the grammar engine are recovered
//!       from the source-line gap between consecutive block nodes;
//!     - a soft break serializes as two trailing spaces + newline, and the
//!       split text runs coalesce back into a single leaf on reparse.
//!
//!     The grammar engine is comrak (CommonMark + GFM tables, strikethrough,
//!     task lists, autolink); this crate never lexes block markdown itself.
//!     The one scanner written by hand is the HTML tag scanner in
//!     ./escape.rs, which masks tag spans so URL-slash escaping cannot
//!     touch slashes that are semantically safe inside links and HTML.

mod error;
pub mod escape;
pub mod marks;
mod parse;
mod serialize;
pub mod tree;

pub use error::ConvertError;
pub use escape::{escape_text, escape_url_slashes, unescape_markdown, unescape_url_slashes};
pub use parse::parse;
pub use serialize::serialize;
pub use tree::{Anchor, ColumnAlignment, Element, ImageInline, Segment, TableColumn, Text};
