//!
//! Character classes and the mask compiler.
//!
//! A mask uses two markers:
//! * `#`: a digit slot
//! * `A`: a letter slot
//!
//! Every other character of the mask is filler.
//!

use log::debug;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::ops::Index;
use std::slice;
use unicode_segmentation::UnicodeSegmentation;

/// Character class of one position of a mask.
///
/// A compiled mask uses the same value for every slot of a
/// class, so all digit slots of `(###) ###-####` compare equal.
/// Deleting relies on this to shift a class across filler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// 0-9
    Digit,
    /// a-z, A-Z
    Letter,
    /// a-z, A-Z, 0-9
    Alphanumeric,
    /// a-z, A-Z, 0-9 or the placeholder
    AlphanumericOrPlaceholder,
    /// anything but a marker
    Filler,
}

impl Display for CharClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            CharClass::Digit => "#",
            CharClass::Letter => "A",
            CharClass::Alphanumeric => "*",
            CharClass::AlphanumericOrPlaceholder => "?",
            CharClass::Filler => ".",
        };
        write!(f, "{}", s)
    }
}

impl CharClass {
    /// Editable position of a mask.
    #[inline]
    pub fn is_slot(&self) -> bool {
        matches!(self, CharClass::Digit | CharClass::Letter)
    }
}

/// Mask compiled to one [CharClass] per grapheme.
#[derive(Default, Clone, PartialEq, Eq, Hash)]
pub struct CompiledMask {
    classes: Box<[CharClass]>,
}

impl Debug for CompiledMask {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for c in self.classes.iter() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl Index<usize> for CompiledMask {
    type Output = CharClass;

    fn index(&self, index: usize) -> &Self::Output {
        &self.classes[index]
    }
}

impl<'a> IntoIterator for &'a CompiledMask {
    type Item = &'a CharClass;
    type IntoIter = slice::Iter<'a, CharClass>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.iter()
    }
}

impl CompiledMask {
    /// Number of positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Class at the position.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<CharClass> {
        self.classes.get(idx).copied()
    }

    /// Is the position an editable slot.
    /// Positions beyond the mask are not.
    #[inline]
    pub fn is_slot(&self, idx: usize) -> bool {
        self.get(idx).is_some_and(|v| v.is_slot())
    }

    pub fn iter(&self) -> slice::Iter<'_, CharClass> {
        self.classes.iter()
    }
}

/// Markers and placeholder of a mask.
///
/// A grammar is a small value, every template holds its own copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    digit_marker: char,
    letter_marker: char,
    placeholder: Box<str>,
}

impl Default for Grammar {
    fn default() -> Self {
        Self {
            digit_marker: Grammar::DIGIT_MARKER,
            letter_marker: Grammar::LETTER_MARKER,
            placeholder: Box::from(Grammar::PLACEHOLDER),
        }
    }
}

impl Grammar {
    pub const DIGIT_MARKER: char = '#';
    pub const LETTER_MARKER: char = 'A';
    pub const PLACEHOLDER: &'static str = "_";

    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different placeholder for empty slots.
    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = Box::from(placeholder.to_string());
        self
    }

    /// Use different markers for digit and letter slots.
    pub fn with_markers(mut self, digit: char, letter: char) -> Self {
        self.digit_marker = digit;
        self.letter_marker = letter;
        self
    }

    #[inline]
    pub fn digit_marker(&self) -> char {
        self.digit_marker
    }

    #[inline]
    pub fn letter_marker(&self) -> char {
        self.letter_marker
    }

    #[inline]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Is this grapheme one of the markers.
    #[inline]
    pub fn is_marker(&self, c: &str) -> bool {
        single_char(c).is_some_and(|c| c == self.digit_marker || c == self.letter_marker)
    }

    /// Does the grapheme belong to the class.
    pub fn matches(&self, class: CharClass, c: &str) -> bool {
        match class {
            CharClass::Digit => single_char(c).is_some_and(|c| c.is_ascii_digit()),
            CharClass::Letter => single_char(c).is_some_and(|c| c.is_ascii_alphabetic()),
            CharClass::Alphanumeric => single_char(c).is_some_and(|c| c.is_ascii_alphanumeric()),
            CharClass::AlphanumericOrPlaceholder => {
                c == self.placeholder()
                    || single_char(c).is_some_and(|c| c.is_ascii_alphanumeric())
            }
            CharClass::Filler => !self.is_marker(c),
        }
    }

    /// Compile the mask.
    ///
    /// Every grapheme results in exactly one class, so the
    /// compiled mask has the same length as the mask.
    pub fn compile(&self, mask: &str) -> CompiledMask {
        let classes = mask
            .graphemes(true)
            .map(|c| match single_char(c) {
                Some(c) if c == self.digit_marker => CharClass::Digit,
                Some(c) if c == self.letter_marker => CharClass::Letter,
                _ => CharClass::Filler,
            })
            .collect::<Box<[_]>>();

        let compiled = CompiledMask { classes };
        debug!("compile {:?} -> {:?}", mask, compiled);
        compiled
    }

    /// The mask with every marker replaced by the placeholder.
    pub fn empty_value(&self, mask: &str) -> String {
        let mut buf = String::with_capacity(mask.len());
        for c in mask.graphemes(true) {
            if self.is_marker(c) {
                buf.push_str(self.placeholder());
            } else {
                buf.push_str(c);
            }
        }
        buf
    }
}

/// The grapheme if it is a single char.
fn single_char(s: &str) -> Option<char> {
    let mut it = s.chars();
    match (it.next(), it.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
