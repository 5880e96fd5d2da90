use triad_eval::input::{ValidationError, validate_triple};

#[test]
fn equal_lengths_pass() {
    assert!(validate_triple(&[1, 2], &[3, 4], &[5, 6]).is_ok());
}

#[test]
fn empty_arrays_are_rejected() {
    let err = validate_triple(&[], &[], &[]).unwrap_err();
    assert_eq!(err, ValidationError::Empty);
}

#[test]
fn mismatched_lengths_are_rejected() {
    let err = validate_triple(&[1], &[1, 2], &[1]).unwrap_err();
    assert_eq!(err, ValidationError::LengthMismatch { a: 1, b: 2, c: 1 });
}

#[test]
fn error_message_names_all_lengths() {
    let err = validate_triple(&[1, 2, 3], &[1], &[1, 2]).unwrap_err();
    assert_eq!(err.to_string(), "input array lengths differ: a=3, b=1, c=2");
}
