use core::fmt::Write;

use anypool::traits::{AsView, Take};
use anypool::{Text16, Text8, TextView};

#[test]
fn test_concat_scenario() {
    let hello = Text8::from("hello");
    let world = Text8::from(" world");

    let joined = hello.concat(&world);
    assert_eq!(joined.len(), 11);
    assert_eq!(joined, "hello world");

    let view = joined.view();
    assert_eq!(view, TextView::from_str("hello world"));
}

#[test]
fn test_add_operator_concatenates() {
    let joined = Text8::from("hello") + &Text8::from(" world");
    assert_eq!(joined, "hello world");
}

#[test]
fn test_append_and_push() {
    let mut text = Text8::new();
    assert_eq!(text.capacity(), 0);

    text.append(b"ab");
    text.push(b'c');
    assert_eq!(text, "abc");
    assert_eq!(text.as_bytes(), b"abc");
}

#[test]
fn test_terminator_reserved_past_length() {
    let mut text = Text8::from("path");
    assert_eq!(text.as_nul_terminated(), Some(&b"path\0"[..]));

    text.append(b"/to/file");
    assert_eq!(text.as_nul_terminated(), Some(&b"path/to/file\0"[..]));
    assert_eq!(text.len(), 12);
}

#[test]
fn test_substr_is_owning_copy() {
    let text = Text8::from("hello world");
    let mut word = text.substr(6..11);
    assert_eq!(word, "world");

    // Mutating the copy leaves the original untouched.
    word.push(b'!');
    assert_eq!(text, "hello world");
    assert_eq!(word, "world!");
}

#[test]
fn test_view_substr_reborrows() {
    let text = Text8::from("hello world");
    let view = text.view();
    let word = view.substr(0..5);

    assert_eq!(word, "hello");
    assert_eq!(word, text.substr(0..5).view());
    assert_eq!(word.to_text(), "hello");
}

#[test]
#[should_panic]
fn test_substr_out_of_bounds_fails_fast() {
    let text = Text8::from("short");
    let _ = text.substr(0..6);
}

#[test]
fn test_lexicographic_comparison() {
    let a = Text8::from("apple");
    let b = Text8::from("banana");
    let a2 = Text8::from("applesauce");

    assert!(a < b);
    assert!(a < a2);
    assert_eq!(a.cmp(&a.clone()), core::cmp::Ordering::Equal);
    assert!(a.view() < b.view());
}

#[test]
fn test_find_and_replace() {
    let text = Text8::from("the cat sat on the mat");
    assert_eq!(text.find(b"cat"), Some(4));
    assert_eq!(text.find(b"dog"), None);
    assert!(text.contains(b"sat"));
    assert!(text.starts_with(b"the"));
    assert!(text.ends_with(b"mat"));

    let swapped = text.replace(b"at", b"og");
    assert_eq!(swapped, "the cog sog on the mog");
}

#[test]
fn test_take_transfers_buffer() {
    let mut source = Text8::from("payload");
    let moved = source.take();

    assert_eq!(moved, "payload");
    assert_eq!(source.len(), 0);
    assert_eq!(source.capacity(), 0);

    // The source is reusable afterwards.
    source.append(b"new");
    assert_eq!(source, "new");
}

#[test]
fn test_as_view_trait() {
    let text = Text8::from("abc");
    let view = text.as_view();
    assert_eq!(view, text);
}

#[test]
fn test_wide_text_round_trip() {
    let mut wide = Text16::from("wide ");
    wide.append_text(&Text16::from("text"));

    let expected: Vec<u16> = "wide text".encode_utf16().collect();
    assert_eq!(wide.as_units(), expected.as_slice());
    assert_eq!(wide.len(), 9);

    let nul = wide.as_nul_terminated().unwrap();
    assert_eq!(nul[nul.len() - 1], 0u16);
}

#[test]
fn test_wide_comparison() {
    let a = Text16::from("alpha");
    let b = Text16::from("beta");
    assert!(a < b);
    assert_eq!(a, Text16::from("alpha"));
}

#[test]
fn test_formatted_write_into_text() {
    let mut line = Text8::new();
    write!(line, "frame {} took {}ms", 7, 16).unwrap();
    assert_eq!(line, "frame 7 took 16ms");

    let mut wide = Text16::new();
    write!(wide, "x={}", 3).unwrap();
    let expected: Vec<u16> = "x=3".encode_utf16().collect();
    assert_eq!(wide.as_units(), expected.as_slice());
}

#[test]
fn test_as_str_round_trip() {
    let text = Text8::from("héllo");
    assert_eq!(text.as_str(), Some("héllo"));

    let mut raw = Text8::new();
    raw.append(&[0xff, 0xfe]);
    assert_eq!(raw.as_str(), None);
}

#[test]
fn test_clone_is_deep() {
    let original = Text8::from("data");
    let mut copy = original.clone();
    copy.push(b'!');

    assert_eq!(original, "data");
    assert_eq!(copy, "data!");
}

#[test]
fn test_clear_and_reset() {
    let mut text = Text8::from("buffer");
    text.clear();
    assert!(text.is_empty());
    assert_eq!(text.as_nul_terminated(), Some(&b"\0"[..]));

    text.reset();
    assert_eq!(text.capacity(), 0);
    assert!(text.as_nul_terminated().is_none());
}
