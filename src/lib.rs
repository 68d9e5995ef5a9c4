#![doc = include_str!("../readme.md")]
#![allow(clippy::uninlined_format_args)]
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::ops::Range;

pub mod grammar;
pub mod masked_field;
pub mod template;

pub use grammar::{CharClass, CompiledMask, Grammar};
pub use masked_field::MaskedField;
pub use template::Template;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// The template has no grammar to compile the mask with.
    NoGrammar,
    /// The selection is not inside the text.
    ///
    /// Contains the start and end of the selection and the
    /// length of the text in graphemes, in that order.
    InvalidSelection(upos_type, upos_type, upos_type),
}

impl Display for MaskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for MaskError {}

/// Text position.
///
/// Positions count graphemes, not bytes.
#[allow(non_camel_case_types)]
pub type upos_type = u32;

/// Result of an edit operation.
///
/// Contains the new text and the selection that should be
/// set after applying the text. Most operations return a
/// collapsed selection, which is just the new cursor position.
#[derive(Default, Clone, PartialEq, Eq, Hash)]
pub struct EditResult {
    text: String,
    start: upos_type,
    end: upos_type,
}

impl Debug for EditResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} {}-{}", self.text, self.start, self.end)
    }
}

impl EditResult {
    /// New result with the selection `start..end`.
    ///
    /// Panic
    /// Panics if start > end.
    pub fn new(text: impl Into<String>, start: upos_type, end: upos_type) -> Self {
        assert!(start <= end);
        Self {
            text: text.into(),
            start,
            end,
        }
    }

    /// New result with the selection collapsed at `pos`.
    pub fn collapsed(text: impl Into<String>, pos: upos_type) -> Self {
        Self {
            text: text.into(),
            start: pos,
            end: pos,
        }
    }

    /// Resulting text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Take the text.
    #[inline]
    pub fn into_text(self) -> String {
        self.text
    }

    /// Selection start.
    #[inline]
    pub fn start(&self) -> upos_type {
        self.start
    }

    /// Selection end.
    #[inline]
    pub fn end(&self) -> upos_type {
        self.end
    }

    /// Length of the selection.
    #[inline]
    pub fn length(&self) -> upos_type {
        self.end - self.start
    }

    /// Selection is just a cursor.
    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Selection as range.
    #[inline]
    pub fn selection(&self) -> Range<upos_type> {
        self.start..self.end
    }
}
