use super::*;

#[test]
fn try_consume_prefix_advances_by_its_length() {
    let s = "hello world";
    for p in ["", "h", "hello", "hello ", "hello world"] {
        let mut c = Cursor::new(s);
        assert!(c.try_consume(p), "prefix={:?}", p);
        assert_eq!(c.offset(), p.len());
        assert_eq!(c.remaining(), &s[p.len()..]);
    }
}

#[test]
fn try_consume_mismatch_leaves_cursor_alone() {
    for p in ["x", "hello!", "Hello", "hello world and more"] {
        let mut c = Cursor::new("hello world");
        assert!(!c.try_consume(p), "prefix={:?}", p);
        assert_eq!(c.offset(), 0);
        assert_eq!(c.remaining(), "hello world");
    }
}

#[test]
fn try_consume_char_handles_multibyte() {
    let mut c = Cursor::new("→x");
    assert!(!c.try_consume_char('x'));
    assert!(c.try_consume_char('→'));
    assert_eq!(c.offset(), '→'.len_utf8());
    assert_eq!(c.char_offset(), 1);
    assert_eq!(c.peek(), Some('x'));
}

#[test]
fn consume_literal_sequence() {
    let mut c = Cursor::new("key=value;");
    c.consume("key");
    c.consume("=");
    assert_eq!(c.remaining(), "value;");
}

#[test]
fn peek_and_is_done_track_the_front() {
    let mut c = Cursor::new("ab");
    assert_eq!(c.peek(), Some('a'));
    assert!(!c.is_done());
    assert_eq!(c.consume_next(), 'a');
    assert_eq!(c.consume_next(), 'b');
    assert_eq!(c.peek(), None);
    assert!(drained(&c));
}

#[test]
fn try_consume_next_on_empty_is_absent() {
    let mut c = Cursor::new("");
    assert_eq!(c.try_consume_next(), None);
    assert_eq!(c.offset(), 0);
    let mut c = Cursor::new("é");
    assert_eq!(c.try_consume_next(), Some('é'));
    assert_eq!(c.try_consume_next(), None);
}

#[test]
fn consume_next_n_counts_characters() {
    let mut c = Cursor::new("naïve text");
    assert_eq!(c.consume_next_n(5), "naïve");
    assert_eq!(c.remaining(), " text");
    assert_eq!(c.consume_next_n(0), "");
    assert_eq!(c.consume_next_n(5), " text");
    assert!(drained(&c));
}

#[test]
fn try_consume_next_n_past_end_does_not_move() {
    let mut c = Cursor::new("abc");
    assert_eq!(c.try_consume_next_n(4), None);
    assert_eq!(c.offset(), 0);
    assert_eq!(c.try_consume_next_n(3), Some("abc"));
}

#[test]
fn consume_rest_is_idempotent() {
    let mut c = Cursor::new("prefix: tail");
    c.consume("prefix:");
    assert_eq!(c.consume_rest(), " tail");
    assert_eq!(c.consume_rest(), "");
    assert!(drained(&c));
}

#[test]
fn consume_copies_of_skips_only_that_char() {
    let mut c = Cursor::new("   \tx");
    c.consume_copies_of(' ');
    assert_eq!(c.remaining(), "\tx");
    c.consume_copies_of(' ');
    assert_eq!(c.remaining(), "\tx");
}

#[test]
fn consume_while_returns_the_run() {
    let mut c = Cursor::new("aaab");
    assert_eq!(c.consume_while(|ch| ch == 'a'), "aaa");
    assert_eq!(c.consume_while(|ch| ch == 'a'), "");
    assert_eq!(c.remaining(), "b");
}

#[test]
fn consume_while_is_a_function_of_position() {
    let start = {
        let mut c = Cursor::new("xx12345yy");
        c.consume("xx");
        c
    };
    let first = start.clone().consume_while(|ch| ch.is_ascii_digit());
    let second = start.clone().consume_while(|ch| ch.is_ascii_digit());
    assert_eq!(first, "12345");
    assert_eq!(first, second);
    assert_eq!(start.offset(), 2);
}

#[test]
fn consume_whitespace_covers_unicode_spaces() {
    let mut c = Cursor::new(" \t\n\u{00A0}x ");
    assert_eq!(c.consume_whitespace(), " \t\n\u{00A0}");
    assert_eq!(c.peek(), Some('x'));
}

#[test]
fn fragments_borrow_from_source() {
    let src = String::from("abc,def");
    let frag;
    {
        let mut c = Cursor::new(&src);
        frag = c.consume_through(',').unwrap();
    }
    assert_eq!(frag, "abc");
    assert!(std::ptr::eq(frag.as_ptr(), src.as_ptr()));
}

#[test]
fn clone_snapshots_position() {
    let mut c = Cursor::new("a1");
    let saved = c.clone();
    c.consume("a");
    assert_eq!(c.read_int(), 1);
    let mut c = saved;
    assert_eq!(c.read_word(), "a1");
}
