use crate::grammar::CharClass;
use crate::template::Template;
use crate::{EditResult, upos_type};
use log::debug;
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// Search direction for slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Forward,
    Backward,
}

/// Find the next slot where the current text belongs to the class.
///
/// Forward searches start at `start`, backward searches start
/// right before `start`.
fn next_slot(
    template: &Template,
    chars: &[&str],
    start: usize,
    direction: Direction,
    class: CharClass,
) -> Option<usize> {
    let start = start.min(chars.len());
    let is_match =
        |i: &usize| template.compiled().is_slot(*i) && template.matches(class, chars[*i]);
    match direction {
        Direction::Forward => (start..chars.len()).find(is_match),
        Direction::Backward => (0..start).rev().find(is_match),
    }
}

/// Does the grapheme fit the slot.
fn is_valid_at(template: &Template, c: &str, idx: usize) -> bool {
    template
        .compiled()
        .get(idx)
        .is_some_and(|class| class.is_slot() && template.matches(class, c))
}

/// Insert one char.
pub(crate) fn add_character(
    template: &Template,
    start: upos_type,
    c: char,
    text: &str,
) -> EditResult {
    let mut buf = [0u8; 4];
    let c = &*c.encode_utf8(&mut buf);
    let mut chars = text.graphemes(true).collect::<Vec<_>>();

    let Some(pos) = next_slot(
        template,
        &chars,
        start as usize,
        Direction::Forward,
        CharClass::AlphanumericOrPlaceholder,
    ) else {
        return EditResult::collapsed(text, start);
    };

    if !is_valid_at(template, c, pos) {
        debug!("add_character: reject {:?} at {}", c, pos);
        return EditResult::collapsed(text, start);
    }

    chars[pos] = c;

    // behind the last slot the cursor goes right after the new char.
    let cursor = next_slot(
        template,
        &chars,
        pos + 1,
        Direction::Forward,
        CharClass::AlphanumericOrPlaceholder,
    )
    .unwrap_or(pos + 1);

    EditResult::collapsed(chars.concat(), cursor as upos_type)
}

/// Insert a string.
pub(crate) fn add_characters(
    template: &Template,
    start: upos_type,
    new_chars: &str,
    text: &str,
) -> EditResult {
    let mask = template.mask().graphemes(true).collect::<Vec<_>>();
    let mut chars = text.graphemes(true).collect::<Vec<_>>();

    if start as usize >= chars.len() {
        return EditResult::collapsed(text, start);
    }

    let Some(mut idx) = next_slot(
        template,
        &chars,
        start as usize,
        Direction::Forward,
        CharClass::AlphanumericOrPlaceholder,
    ) else {
        return EditResult::collapsed(text, start);
    };

    let mut cursor = idx;
    // first position not yet passed by the input.
    let mut gap = start as usize;
    for c in new_chars.graphemes(true) {
        // input that repeats the filler before the slot is used up by the filler.
        if let Some(f) = (gap..idx).find(|f| mask.get(*f) == Some(&c)) {
            gap = f + 1;
            continue;
        }
        if !is_valid_at(template, c, idx) {
            continue;
        }

        chars[idx] = c;
        gap = idx + 1;

        match next_slot(
            template,
            &chars,
            idx + 1,
            Direction::Forward,
            CharClass::AlphanumericOrPlaceholder,
        ) {
            Some(next) => {
                idx = next;
                cursor = next;
            }
            None => {
                cursor = chars.len();
                break;
            }
        }
    }

    EditResult::collapsed(chars.concat(), cursor as upos_type)
}

/// Remove one char and shift everything of the same class to the left.
///
/// The class is taken from the slot, and every later position that
/// holds a char of this class takes part, regardless of any filler
/// in between.
pub(crate) fn remove_char(
    template: &Template,
    start: upos_type,
    direction: Direction,
    text: &str,
) -> EditResult {
    let mut chars = text.graphemes(true).collect::<Vec<_>>();

    let Some(anchor) = next_slot(
        template,
        &chars,
        start as usize,
        direction,
        CharClass::Alphanumeric,
    ) else {
        return EditResult::collapsed(text, start);
    };

    let class = template.compiled()[anchor];
    let placeholder = template.placeholder();

    let mut source = None;
    for i in anchor..chars.len() {
        if !(template.compiled().is_slot(i) && template.matches(class, chars[i])) {
            continue;
        }
        let from = source.map_or(i + 1, |v| v + 1);
        source = next_slot(template, &chars, from, Direction::Forward, class);
        chars[i] = match source {
            Some(source) => chars[source],
            None => placeholder,
        };
    }

    EditResult::collapsed(chars.concat(), anchor as upos_type)
}

/// Replace all chars in the range with the placeholder.
pub(crate) fn remove_range(
    template: &Template,
    range: Range<upos_type>,
    text: &str,
) -> EditResult {
    if range.is_empty() {
        return EditResult::collapsed(text, range.start);
    }

    let mut chars = text.graphemes(true).collect::<Vec<_>>();

    let Some(first) = next_slot(
        template,
        &chars,
        range.start as usize,
        Direction::Forward,
        CharClass::Alphanumeric,
    ) else {
        return EditResult::collapsed(text, range.start);
    };
    // the last char can only go with remove_next_char.
    if first + 1 >= chars.len() {
        debug!("remove_range: {:?} starts at the last char", range);
        return EditResult::collapsed(text, range.start);
    }

    let end = (range.end as usize).min(chars.len());
    let placeholder = template.placeholder();
    for i in first..end {
        if template.compiled().is_slot(i) && template.matches(CharClass::Alphanumeric, chars[i]) {
            chars[i] = placeholder;
        }
    }

    EditResult::collapsed(chars.concat(), range.start)
}
