//! Mark codec: inline style flags to markdown token pairs.
//!
//! The mapping is a closed table by design. `Code` is a deliberate no-op
//! here because code text needs backtick fencing without escaping, which the
//! line serializer handles specially. `Underline` has no markdown token and
//! maps to the empty string; marks without a token are ignored rather than
//! rejected, so the host can carry style flags serialization does not emit.

use crate::tree::Text;

/// A character-level style flag on a text leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Strike,
    Highlight,
    Code,
}

/// The fixed order in which simultaneous marks open. Closing symbols use the
/// reverse of this order so the token pairs nest. Combinations mixing `_`
/// and `**` can still produce markdown that some renderers parse
/// differently; that ambiguity is inherent to the token table.
pub const MARK_ORDER: &[Mark] = &[
    Mark::Bold,
    Mark::Italic,
    Mark::Underline,
    Mark::Strike,
    Mark::Highlight,
    Mark::Code,
];

/// Opening token for a single mark.
pub fn open_symbol(mark: Mark) -> &'static str {
    match mark {
        Mark::Bold => "**",
        Mark::Italic => "_",
        Mark::Underline => "",
        Mark::Strike => "~~",
        Mark::Highlight => "<mark>",
        Mark::Code => "",
    }
}

/// Closing token for a single mark.
pub fn close_symbol(mark: Mark) -> &'static str {
    match mark {
        Mark::Bold => "**",
        Mark::Italic => "_",
        Mark::Underline => "",
        Mark::Strike => "~~",
        Mark::Highlight => "</mark>",
        Mark::Code => "",
    }
}

/// Opening tokens for a set of marks, in the given order.
pub fn marks_to_open_symbols(marks: &[Mark]) -> String {
    marks.iter().map(|mark| open_symbol(*mark)).collect()
}

/// Closing tokens for a set of marks, in reverse order so the pairs nest.
pub fn marks_to_close_symbols(marks: &[Mark]) -> String {
    marks.iter().rev().map(|mark| close_symbol(*mark)).collect()
}

/// The marks active on a text leaf, in [`MARK_ORDER`].
pub fn active_marks(text: &Text) -> Vec<Mark> {
    MARK_ORDER
        .iter()
        .copied()
        .filter(|mark| match mark {
            Mark::Bold => text.bold,
            Mark::Italic => text.italic,
            Mark::Underline => text.underline,
            Mark::Strike => text.strike,
            Mark::Highlight => text.highlight,
            Mark::Code => text.code,
        })
        .collect()
}
