//! Edit state for one masked field.
//!
//! Holds the text and the selection of the field and maps
//! the usual editing actions onto the [Template]:
//!
//! * typing: [Template::add_character] at the start of the selection.
//! * paste: [Template::add_characters] at the start of the selection.
//! * backspace/delete: with a selection [Template::remove_char_range],
//!   otherwise [Template::remove_prev_char]/[Template::remove_next_char].
//!
//! ```rust
//! use rat_mask::{Grammar, MaskedField, Template};
//!
//! let template = Template::with_mask(Grammar::default(), "##/##/####")?;
//! let mut field = MaskedField::new(template);
//!
//! for c in "24121999".chars() {
//!     field.insert_char(c);
//! }
//! assert_eq!(field.text(), "24/12/1999");
//! assert!(field.is_valid());
//!
//! field.set_cursor(1, false);
//! field.delete_prev_char();
//! assert_eq!(field.text(), "41/21/999_");
//! # Ok::<(), rat_mask::MaskError>(())
//! ```

use crate::template::Template;
use crate::{EditResult, MaskError, upos_type};
use std::cmp::{max, min};
use std::ops::Range;
use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;

/// Text and selection of a masked field.
#[derive(Debug, Clone)]
pub struct MaskedField {
    template: Arc<Template>,
    text: String,
    anchor: upos_type,
    cursor: upos_type,
}

impl MaskedField {
    /// New field. The text starts as the empty value of the template.
    pub fn new(template: impl Into<Arc<Template>>) -> Self {
        let template = template.into();
        Self {
            text: template.empty_value().to_string(),
            template,
            anchor: 0,
            cursor: 0,
        }
    }

    /// With some initial text.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.set_text(text);
        self
    }

    /// The template.
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Shared template.
    pub fn shared_template(&self) -> Arc<Template> {
        self.template.clone()
    }
}

impl MaskedField {
    /// Current text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in graphemes.
    #[inline]
    pub fn len(&self) -> upos_type {
        self.text.graphemes(true).count() as upos_type
    }

    /// Nothing entered. Either no text at all or the empty value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() || self.template.is_empty_value(&self.text)
    }

    /// Text conforms to the mask.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.template.test(&self.text)
    }

    /// Set the text. No checks against the mask.
    /// The cursor goes to 0.
    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
        self.anchor = 0;
        self.cursor = 0;
    }

    /// Reset to the empty value.
    pub fn clear(&mut self) -> bool {
        if self.text == self.template.empty_value() && self.cursor == 0 && self.anchor == 0 {
            false
        } else {
            self.set_text(self.template.empty_value().to_string());
            true
        }
    }
}

impl MaskedField {
    /// Cursor position.
    #[inline]
    pub fn cursor(&self) -> upos_type {
        self.cursor
    }

    /// Selection anchor.
    #[inline]
    pub fn anchor(&self) -> upos_type {
        self.anchor
    }

    /// Any text selected.
    #[inline]
    pub fn has_selection(&self) -> bool {
        self.anchor != self.cursor
    }

    /// Selection. Ordered, the cursor may be on either end.
    #[inline]
    pub fn selection(&self) -> Range<upos_type> {
        min(self.anchor, self.cursor)..max(self.anchor, self.cursor)
    }

    /// Set the cursor. Positions beyond the text are
    /// moved to the end of the text.
    pub fn set_cursor(&mut self, cursor: upos_type, extend_selection: bool) -> bool {
        let old = (self.anchor, self.cursor);

        self.cursor = min(cursor, self.len());
        if !extend_selection {
            self.anchor = self.cursor;
        }

        old != (self.anchor, self.cursor)
    }

    /// Set the selection. Positions beyond the text are
    /// moved to the end of the text.
    pub fn set_selection(&mut self, anchor: upos_type, cursor: upos_type) -> bool {
        let old = (self.anchor, self.cursor);

        let len = self.len();
        self.anchor = min(anchor, len);
        self.cursor = min(cursor, len);

        old != (self.anchor, self.cursor)
    }

    /// Set the selection. Fails for positions beyond the text.
    pub fn try_set_selection(
        &mut self,
        anchor: upos_type,
        cursor: upos_type,
    ) -> Result<bool, MaskError> {
        let len = self.len();
        if anchor > len || cursor > len {
            return Err(MaskError::InvalidSelection(anchor, cursor, len));
        }
        Ok(self.set_selection(anchor, cursor))
    }

    /// Select everything.
    pub fn select_all(&mut self) -> bool {
        self.set_selection(0, self.len())
    }
}

impl MaskedField {
    /// Type a char at the start of the selection.
    ///
    /// The selection is not removed first.
    pub fn insert_char(&mut self, c: char) -> bool {
        let r = self
            .template
            .add_character(self.selection().start, c, &self.text);
        self.apply(r)
    }

    /// Paste a string at the start of the selection.
    pub fn paste(&mut self, s: &str) -> bool {
        let r = self
            .template
            .add_characters(self.selection().start, s, &self.text);
        self.apply(r)
    }

    /// Backspace.
    pub fn delete_prev_char(&mut self) -> bool {
        if self.has_selection() {
            self.delete_range(self.selection())
        } else {
            let r = self.template.remove_prev_char(self.cursor, &self.text);
            self.apply(r)
        }
    }

    /// Delete.
    pub fn delete_next_char(&mut self) -> bool {
        if self.has_selection() {
            self.delete_range(self.selection())
        } else {
            let r = self.template.remove_next_char(self.cursor, &self.text);
            self.apply(r)
        }
    }

    /// Clear the slots in the range.
    pub fn delete_range(&mut self, range: Range<upos_type>) -> bool {
        let r = self
            .template
            .remove_char_range(range.start, range.end, &self.text);
        self.apply(r)
    }

    /// Show the full mask when editing starts.
    ///
    /// Fits the current text into the mask and puts the cursor
    /// at the first empty slot.
    pub fn show_mask(&mut self) -> bool {
        let old = (self.text.clone(), self.anchor, self.cursor);

        self.text = self.template.masked_value(&self.text);
        let placeholder = self.template.placeholder();
        if let Some(pos) = self.text.graphemes(true).position(|c| c == placeholder) {
            self.anchor = pos as upos_type;
            self.cursor = pos as upos_type;
        } else {
            let len = self.len();
            self.anchor = min(self.anchor, len);
            self.cursor = min(self.cursor, len);
        }

        old != (self.text.clone(), self.anchor, self.cursor)
    }

    /// Hide the mask when editing ends.
    ///
    /// If nothing has been entered the text is cleared completely.
    pub fn hide_mask(&mut self) -> bool {
        if !self.text.is_empty() && self.template.is_empty_value(&self.text) {
            self.set_text("");
            true
        } else {
            false
        }
    }

    /// Apply the result of an edit.
    pub fn apply(&mut self, r: EditResult) -> bool {
        let changed = self.text != r.text()
            || self.anchor != r.start()
            || self.cursor != r.end();

        let (start, end) = (r.start(), r.end());
        self.text = r.into_text();
        self.anchor = start;
        self.cursor = end;

        changed
    }
}
