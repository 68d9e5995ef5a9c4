use rat_mask::{Grammar, MaskError, MaskedField, Template};
use std::sync::Arc;

fn field(mask: &str) -> MaskedField {
    MaskedField::new(Template::with_mask(Grammar::default(), mask).expect("mask"))
}

#[test]
fn test_typing() {
    let mut f = field("(###) ###-####");
    assert_eq!(f.text(), "(___) ___-____");
    assert_eq!(f.len(), 14);
    assert!(f.is_empty());

    for c in "5551234567".chars() {
        assert!(f.insert_char(c));
    }
    assert_eq!(f.text(), "(555) 123-4567");
    assert_eq!(f.cursor(), 14);
    assert!(f.is_valid());
    assert!(!f.is_empty());

    // no more room
    assert!(!f.insert_char('8'));
    assert_eq!(f.text(), "(555) 123-4567");
}

#[test]
fn test_typing_rejected() {
    let mut f = field("AAA-###");

    assert!(!f.insert_char('1'));
    assert_eq!(f.text(), "___-___");
    assert_eq!(f.cursor(), 0);

    assert!(f.insert_char('x'));
    assert_eq!(f.text(), "x__-___");
    assert_eq!(f.cursor(), 1);
}

#[test]
fn test_typing_with_selection() {
    let mut f = field("###-####").with_text("123-4567");

    // the selection is not cleared, typing overwrites at its start.
    f.set_selection(5, 1);
    assert_eq!(f.selection(), 1..5);
    assert!(f.insert_char('9'));
    assert_eq!(f.text(), "193-4567");
    assert_eq!(f.cursor(), 2);
    assert!(!f.has_selection());
}

#[test]
fn test_paste() {
    let mut f = field("(###) ###-####");

    assert!(f.paste("(555) 123-4567"));
    assert_eq!(f.text(), "(555) 123-4567");
    assert_eq!(f.cursor(), 14);

    f.clear();
    f.set_cursor(6, false);
    assert!(f.paste("12ab3"));
    assert_eq!(f.text(), "(___) 123-____");
    assert_eq!(f.cursor(), 10);
}

#[test]
fn test_backspace() {
    let mut f = field("(###) ###-####").with_text("(123) 456-7890");

    f.set_cursor(3, false);
    assert!(f.delete_prev_char());
    assert_eq!(f.text(), "(134) 567-890_");
    assert_eq!(f.cursor(), 2);

    f.set_cursor(0, false);
    assert!(!f.delete_prev_char());
    assert_eq!(f.text(), "(134) 567-890_");
}

#[test]
fn test_delete() {
    let mut f = field("(###) ###-####").with_text("(123) 456-7890");

    f.set_cursor(2, false);
    assert!(f.delete_next_char());
    assert_eq!(f.text(), "(134) 567-890_");
    assert_eq!(f.cursor(), 2);

    f.set_cursor(14, false);
    assert!(!f.delete_next_char());
}

#[test]
fn test_delete_selection() {
    let mut f = field("(###) ###-####").with_text("(123) 456-7890");

    f.set_selection(2, 8);
    assert!(f.delete_prev_char());
    assert_eq!(f.text(), "(1__) __6-7890");
    assert_eq!(f.selection(), 2..2);

    f.set_selection(10, 12);
    assert!(f.delete_next_char());
    assert_eq!(f.text(), "(1__) __6-__90");
    assert_eq!(f.cursor(), 10);
}

#[test]
fn test_show_hide_mask() {
    let mut f = field("###-####").with_text("");

    assert!(f.show_mask());
    assert_eq!(f.text(), "___-____");
    assert_eq!(f.cursor(), 0);

    assert!(f.hide_mask());
    assert_eq!(f.text(), "");
    assert!(!f.hide_mask());

    f.set_text("12345");
    assert!(f.show_mask());
    assert_eq!(f.text(), "123-45__");
    assert_eq!(f.cursor(), 6);
    assert!(!f.hide_mask());
    assert_eq!(f.text(), "123-45__");

    // complete values keep the cursor
    f.set_text("123-4567");
    f.set_cursor(3, false);
    assert!(!f.show_mask());
    assert_eq!(f.cursor(), 3);
}

#[test]
fn test_selection() -> Result<(), anyhow::Error> {
    let mut f = field("##-##");

    assert!(f.select_all());
    assert_eq!(f.selection(), 0..5);
    assert_eq!(f.anchor(), 0);
    assert_eq!(f.cursor(), 5);

    assert!(f.set_cursor(2, true));
    assert_eq!(f.selection(), 0..2);

    // clamped
    assert!(f.set_cursor(40, false));
    assert_eq!(f.cursor(), 5);
    assert!(!f.has_selection());

    assert_eq!(
        f.try_set_selection(1, 9),
        Err(MaskError::InvalidSelection(1, 9, 5))
    );
    assert!(f.try_set_selection(1, 3)?);
    assert_eq!(f.selection(), 1..3);
    Ok(())
}

#[test]
fn test_shared_template() {
    let t = Arc::new(Template::with_mask(Grammar::default(), "AA").expect("mask"));

    let mut f1 = MaskedField::new(t.clone());
    let mut f2 = MaskedField::new(t.clone());
    f1.insert_char('a');
    f2.insert_char('b');

    assert_eq!(f1.text(), "a_");
    assert_eq!(f2.text(), "b_");
    assert!(Arc::ptr_eq(&f1.shared_template(), &t));
    assert_eq!(f2.template().mask(), "AA");
}
