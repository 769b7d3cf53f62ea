//! Tests for the in-place tokenizer.

use kmon_core::error::MonitorError;
use kmon_core::tokenize::{tokenize, MAX_ARGS};

#[test]
fn test_single_token()
{
    let mut buf = *b"help";
    let args = tokenize(&mut buf).unwrap();
    assert_eq!(args.as_slice(), &["help"][..]);
}

#[test]
fn test_surrounding_and_repeated_whitespace()
{
    let mut buf = *b"  cmd   a  b ";
    let args = tokenize(&mut buf).unwrap();
    assert_eq!(args.as_slice(), &["cmd", "a", "b"][..]);
}

#[test]
fn test_all_whitespace_yields_no_tokens()
{
    let mut buf = *b" \t \r\n ";
    let args = tokenize(&mut buf).unwrap();
    assert!(args.is_empty());
}

#[test]
fn test_empty_buffer_yields_no_tokens()
{
    let mut buf = [0u8; 0];
    let args = tokenize(&mut buf).unwrap();
    assert!(args.is_empty());
}

#[test]
fn test_every_separator_kind()
{
    let mut buf = *b"a\tb\rc\nd e";
    let args = tokenize(&mut buf).unwrap();
    assert_eq!(args.as_slice(), &["a", "b", "c", "d", "e"][..]);
}

#[test]
fn test_line_ends_at_embedded_nul()
{
    let mut buf = *b"help\0backtrace";
    let args = tokenize(&mut buf).unwrap();
    assert_eq!(args.as_slice(), &["help"][..]);
}

#[test]
fn test_separators_are_overwritten_in_place()
{
    // The destructive contract: after the call every separator byte is a
    // terminator, so each token is independently readable in the buffer.
    let mut buf = *b"cmd a b";
    {
        let _ = tokenize(&mut buf).unwrap();
    }
    assert_eq!(&buf, b"cmd\0a\0b");
}

#[test]
fn test_exactly_max_args_is_accepted()
{
    let line = (0..MAX_ARGS).map(|i| format!("t{i}")).collect::<Vec<_>>().join(" ");
    let mut buf = line.into_bytes();
    let args = tokenize(&mut buf).unwrap();
    assert_eq!(args.len(), MAX_ARGS);
}

#[test]
fn test_one_past_max_args_is_rejected()
{
    let line = (0..=MAX_ARGS).map(|i| format!("t{i}")).collect::<Vec<_>>().join(" ");
    let mut buf = line.into_bytes();
    let result = tokenize(&mut buf);
    match result {
        Err(MonitorError::TooManyArguments { limit }) => assert_eq!(limit, MAX_ARGS),
        other => panic!("expected TooManyArguments, got {other:?}"),
    }
}

#[test]
fn test_invalid_utf8_is_rejected()
{
    let mut buf = [b'c', 0xff, b'd'];
    assert!(matches!(tokenize(&mut buf), Err(MonitorError::InvalidUtf8(_))));
}

#[test]
fn test_error_messages()
{
    let message = format!("{}", MonitorError::TooManyArguments { limit: MAX_ARGS });
    assert!(message.contains("Too many arguments"));
    assert!(message.contains("16"));
}
