//! Randomised create/append/duplicate/substring scenarios.

use std::cmp::Ordering;
use std::ffi::CString;

use sstr::SStr;
use test_support::{random_alnum, random_below};

#[test]
fn create_and_compare_random_strings() {
    for len in 1..=1000 {
        let text = random_alnum(len);
        let c_text = CString::new(text.clone()).expect("alphanumeric has no zero byte");

        let from_c = SStr::from_c_str(&c_text).expect("allocation succeeds");
        let from_bytes = SStr::from_bytes(text.as_bytes()).expect("allocation succeeds");

        assert_eq!(from_c.as_c_str(), c_text.as_c_str());
        assert_eq!(from_c.compare_c_str(&c_text), Ordering::Equal);
        assert_eq!(from_bytes.compare(&from_c), Ordering::Equal);
        assert_eq!(from_c.len(), text.len());
    }
}

#[test]
fn append_zero_accumulates_triangular_length() {
    let mut value = SStr::new();
    let mut expected = 0usize;
    for step in 1..=1000 {
        expected += step;
        value.append_zeros(step).expect("append succeeds");
    }

    assert_eq!(value.len(), expected);
    assert!(value.as_bytes().iter().all(|&byte| byte == 0));
}

#[test]
fn append_variants_agree() {
    let mut via_bytes = SStr::new();
    let mut via_c_str = SStr::new();
    let mut via_sstr = SStr::new();
    let mut reference = Vec::new();
    let mut expected = 0usize;

    for step in 1..=500 {
        expected += step;
        let text = random_alnum(step);
        let c_text = CString::new(text.clone()).expect("alphanumeric has no zero byte");

        via_bytes.append_bytes(text.as_bytes()).expect("append succeeds");
        via_c_str.append_c_str(&c_text).expect("append succeeds");
        let piece = SStr::try_from(text.as_str()).expect("allocation succeeds");
        via_sstr.append(&piece).expect("append succeeds");
        reference.extend_from_slice(text.as_bytes());
    }

    assert_eq!(via_bytes.len(), expected);
    assert_eq!(via_c_str.len(), expected);
    assert_eq!(via_sstr.len(), expected);
    assert_eq!(via_bytes, via_c_str);
    assert_eq!(via_bytes, via_sstr);
    assert_eq!(via_bytes.as_bytes(), reference.as_slice());
}

#[test]
fn duplicate_random_strings() {
    for len in 1..=1000 {
        let text = random_alnum(len);
        let original = SStr::try_from(text.as_str()).expect("allocation succeeds");
        let copy = original.duplicate().expect("duplicate succeeds");

        assert_eq!(original, text.as_str());
        assert_eq!(original.compare(&copy), Ordering::Equal);
    }
}

#[test]
fn substring_random_offsets_then_clear() {
    for len in 1..=1000 {
        let text = random_alnum(len);
        let mut original = SStr::try_from(text.as_str()).expect("allocation succeeds");
        let index = random_below(original.len());
        let max_len = random_below(usize::from(u16::MAX));
        let mut part = original.substring(index, max_len).expect("substring succeeds");

        assert!(part.len() <= original.len());
        assert_eq!(part.as_bytes(), &text.as_bytes()[index..index + part.len()]);

        part.clear();
        original.clear();
        assert_eq!(part.len(), 0);
        assert_eq!(original.len(), 0);
    }
}
