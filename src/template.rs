//! Mask template with the editing operations.
//!
//! The template doesn't hold any text. Each operation gets the
//! current text of the field and the cursor and returns an
//! [EditResult] with the new text and the new selection.
//!
//! * Typing goes to the next free slot, filler is skipped.
//!   Characters that don't fit the slot are rejected.
//! * Pasting does the same for each character, characters that
//!   don't fit are dropped and the rest continues.
//! * Deleting a single character shifts all following characters
//!   of the same class one slot to the left. This crosses filler,
//!   `(123) 456-7890` minus the `2` is `(134) 567-890_`.
//! * Deleting a range just clears the slots.
//!
//! ```rust
//! use rat_mask::{Grammar, Template};
//!
//! let template = Template::with_mask(Grammar::default(), "AAA-###")?;
//!
//! let r = template.add_characters(1, "1BC23", "___-___");
//! assert_eq!(r.text(), "_BC-23_");
//! assert_eq!(r.selection(), 6..6);
//! # Ok::<(), rat_mask::MaskError>(())
//! ```

use crate::grammar::{CharClass, CompiledMask, Grammar};
use crate::{EditResult, MaskError, upos_type};
use unicode_segmentation::UnicodeSegmentation;

mod template_op;

/// Compiled input mask.
#[derive(Debug, Default, Clone)]
pub struct Template {
    grammar: Option<Grammar>,
    name: Option<Box<str>>,
    mask: Box<str>,
    compiled: CompiledMask,
    empty_value: String,
}

impl Template {
    /// New template without a mask.
    pub fn new(grammar: Grammar) -> Self {
        Self {
            grammar: Some(grammar),
            ..Default::default()
        }
    }

    /// New template with a mask.
    pub fn with_mask<S: AsRef<str>>(grammar: Grammar, mask: S) -> Result<Self, MaskError> {
        let mut s = Self::new(grammar);
        s.set_mask(mask)?;
        Ok(s)
    }

    /// Give the template a name.
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(Box::from(name));
        self
    }

    /// Name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the grammar. Recompiles the current mask.
    pub fn set_grammar(&mut self, grammar: Grammar) {
        self.compiled = grammar.compile(&self.mask);
        self.empty_value = grammar.empty_value(&self.mask);
        self.grammar = Some(grammar);
    }

    pub fn grammar(&self) -> Option<&Grammar> {
        self.grammar.as_ref()
    }

    /// Set the mask.
    ///
    /// * `#`: digit
    /// * `A`: letter
    /// * everything else is copied verbatim.
    ///
    /// The markers can be changed with the [Grammar].
    ///
    /// Fails if there is no grammar.
    pub fn set_mask<S: AsRef<str>>(&mut self, mask: S) -> Result<(), MaskError> {
        let Some(grammar) = &self.grammar else {
            return Err(MaskError::NoGrammar);
        };
        let mask = mask.as_ref();

        self.compiled = grammar.compile(mask);
        self.empty_value = grammar.empty_value(mask);
        self.mask = Box::from(mask);
        Ok(())
    }

    /// The mask.
    pub fn mask(&self) -> &str {
        &self.mask
    }

    /// The compiled mask.
    pub fn compiled(&self) -> &CompiledMask {
        &self.compiled
    }

    /// Placeholder for empty slots.
    pub fn placeholder(&self) -> &str {
        match &self.grammar {
            Some(grammar) => grammar.placeholder(),
            None => Grammar::PLACEHOLDER,
        }
    }

    /// The mask with all slots empty.
    pub fn empty_value(&self) -> &str {
        &self.empty_value
    }

    /// Is this the empty value.
    pub fn is_empty_value(&self, value: &str) -> bool {
        value == self.empty_value
    }

    /// Fit any string into the mask.
    ///
    /// This pastes the value into the empty value.
    pub fn masked_value(&self, value: &str) -> String {
        self.add_characters(0, value, &self.empty_value).into_text()
    }

    /// Does the value conform to the mask.
    ///
    /// The value must have the same length as the mask, and each
    /// character must be the placeholder or fit its slot.
    pub fn test(&self, value: &str) -> bool {
        if value.graphemes(true).count() != self.compiled.len() {
            return false;
        }
        value
            .graphemes(true)
            .zip(self.compiled.iter())
            .all(|(c, class)| c == self.placeholder() || self.matches(*class, c))
    }

    /// Does the grapheme belong to the class.
    #[inline]
    pub(crate) fn matches(&self, class: CharClass, c: &str) -> bool {
        self.grammar
            .as_ref()
            .is_some_and(|grammar| grammar.matches(class, c))
    }
}

impl Template {
    /// Type a character at `start`.
    ///
    /// The character goes to the first free slot at or after `start`,
    /// and the cursor moves behind it. If it doesn't fit that slot the
    /// text stays as it is.
    pub fn add_character(&self, start: upos_type, c: char, text: &str) -> EditResult {
        template_op::add_character(self, start, c, text)
    }

    /// Paste some characters at `start`.
    ///
    /// Each character goes to the next free slot. Characters that
    /// don't fit are skipped. Ends when the characters or the
    /// slots are used up.
    pub fn add_characters(&self, start: upos_type, chars: &str, text: &str) -> EditResult {
        template_op::add_characters(self, start, chars, text)
    }

    /// Delete the character at `start`.
    ///
    /// Filler and empty slots are skipped, then the following characters
    /// of the same class move one slot left.
    pub fn remove_next_char(&self, start: upos_type, text: &str) -> EditResult {
        template_op::remove_char(self, start, template_op::Direction::Forward, text)
    }

    /// Delete the character before `start`.
    ///
    /// Filler and empty slots are skipped, then the following characters
    /// of the same class move one slot left.
    pub fn remove_prev_char(&self, start: upos_type, text: &str) -> EditResult {
        template_op::remove_char(self, start, template_op::Direction::Backward, text)
    }

    /// Clear the slots in `start..end`. Nothing moves.
    pub fn remove_char_range(&self, start: upos_type, end: upos_type, text: &str) -> EditResult {
        template_op::remove_range(self, start..end, text)
    }
}
