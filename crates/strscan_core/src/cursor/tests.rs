use super::Cursor;

// === Basic Navigation ===

#[test]
fn current_returns_first_char() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.current(), Some('a'));
}

#[test]
fn advance_moves_forward() {
    let mut cursor = Cursor::new("abc");
    cursor.advance();
    assert_eq!(cursor.current(), Some('b'));
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_steps_whole_chars() {
    let mut cursor = Cursor::new("é,ü");
    cursor.advance();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), Some(','));
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.current(), None);
    assert_eq!(cursor.pos(), 5);
}

#[test]
fn advance_at_eof_is_noop() {
    let mut cursor = Cursor::new("x");
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.current(), None);
}

#[test]
fn advance_n_moves_multiple() {
    let mut cursor = Cursor::new("abcdef");
    cursor.advance_n(3);
    assert_eq!(cursor.current(), Some('d'));
    assert_eq!(cursor.rest(), "def");
}

// === EOF Detection ===

#[test]
fn empty_source_starts_at_eof() {
    let cursor = Cursor::new("");
    assert_eq!(cursor.current(), None);
    assert_eq!(cursor.rest(), "");
    assert_eq!(cursor.source_len(), 0);
}

#[test]
fn interior_null_is_not_eof() {
    let mut cursor = Cursor::new("a\0b");
    cursor.advance();
    assert_eq!(cursor.current(), Some('\0'));
    assert_eq!(cursor.rest(), "\0b");
}

// === Markers ===

#[test]
fn at_matches_multi_char_marker() {
    let mut cursor = Cursor::new("x$(y)$");
    assert!(!cursor.at("$("));
    cursor.advance();
    assert!(cursor.at("$("));
    assert!(cursor.at("$"));
    assert!(!cursor.at("$)"));
}

#[test]
fn at_never_matches_empty_marker() {
    let cursor = Cursor::new("abc");
    assert!(!cursor.at(""));
}

#[test]
fn at_rejects_marker_running_past_eof() {
    let mut cursor = Cursor::new("a)");
    cursor.advance();
    assert!(!cursor.at(")$"));
}

// === Slice ===

#[test]
fn slice_extracts_substring() {
    let cursor = Cursor::new("hello world");
    assert_eq!(cursor.slice(0, 5), "hello");
    assert_eq!(cursor.slice(6, 11), "world");
}

#[test]
fn slice_from_extracts_to_current() {
    let mut cursor = Cursor::new("abcdef");
    cursor.advance_n(3);
    assert_eq!(cursor.slice_from(0), "abc");
    assert_eq!(cursor.slice_from(1), "bc");
}

#[test]
fn slice_off_boundary_is_empty() {
    let cursor = Cursor::new("é");
    assert_eq!(cursor.slice(0, 1), "");
}

#[test]
fn char_start_before_finds_last_char() {
    let cursor = Cursor::new("aé.");
    assert_eq!(cursor.char_start_before(0), None);
    assert_eq!(cursor.char_start_before(1), Some(0));
    assert_eq!(cursor.char_start_before(3), Some(1));
    assert_eq!(cursor.char_start_before(4), Some(3));
}

#[test]
fn cursor_is_copy_snapshot() {
    let mut cursor = Cursor::new("abc");
    let snapshot = cursor;
    cursor.advance_n(2);
    assert_eq!(snapshot.pos(), 0);
    assert_eq!(cursor.pos(), 2);
}
