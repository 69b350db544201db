//! End-to-end rendering through the public macros and free functions.

use std::ffi::{c_int, c_long};

use sstr::SStr;
use sstr_format::{Arg, FormatError, render, render_bounded, snprintf, sprintf};
use test_support::{random_alnum, seeded};

#[test]
fn int_matches_std_formatting() {
    for i in 0..10_000 as c_int {
        let out = sprintf!("thisis%dinteger", i).expect("render succeeds");
        assert_eq!(out, format!("thisis{i}integer").as_str());

        let out = sprintf!("thisis%dinteger", -i).expect("render succeeds");
        assert_eq!(out, format!("thisis{}integer", -i).as_str());
    }
}

#[test]
fn long_matches_std_formatting() {
    for i in 0..10_000 as c_long {
        let out = sprintf!("thisis%linteger", i).expect("render succeeds");
        assert_eq!(out, format!("thisis{i}integer").as_str());

        let out = sprintf!("thisis%linteger", -i).expect("render succeeds");
        assert_eq!(out, format!("thisis{}integer", -i).as_str());
    }
}

#[test]
fn float_matches_std_fixed_point() {
    use rand::Rng;

    let mut rng = seeded(0x5eed);
    let mut checked = 0;
    for _ in 0..10_000 {
        let magnitude: f32 = rng.gen_range(0.0..100.0);
        // Only values with at most 11 fraction bits can land exactly on a
        // tie at ten digits; std rounds those to even.
        if (f64::from(magnitude) * 2048.0).fract() == 0.0 {
            continue;
        }
        for value in [magnitude, -magnitude] {
            let out = sprintf!("thisis%.10ffloat", value).expect("render succeeds");
            let expected = format!("thisis{:.10}float", f64::from(value));
            assert_eq!(out, expected.as_str(), "{value}");
            checked += 1;
        }
    }
    assert!(checked > 19_000, "only {checked} values compared");
}

#[test]
fn sstr_round_trips_through_percent_s() {
    for len in 1..=1000 {
        let source = SStr::from_bytes(random_alnum(len).as_bytes()).expect("allocation succeeds");
        let out = sprintf!("%S", &source).expect("render succeeds");
        assert_eq!(out, source);
    }
}

#[test]
fn documented_scenarios() {
    assert_eq!(sprintf!("thisis%dinteger", 42).unwrap(), "thisis42integer");
    assert_eq!(sprintf!("thisis%dinteger", -7).unwrap(), "thisis-7integer");
    assert_eq!(sprintf!("%*s", 3, "abcdef").unwrap(), "abc");
    assert_eq!(sprintf!("%05D", 42i32).unwrap(), "00042");
    assert!(matches!(
        sprintf!("%q"),
        Err(FormatError::UnknownCode { offset: 0, code: b'q' })
    ));
}

#[test]
fn demo_line() {
    let mut total = SStr::new();
    total.append_bytes(b"hello").unwrap();
    total.append_bytes(b" ").unwrap();
    total.append_bytes(b"world").unwrap();

    let out = sprintf!(
        "stotal=%S, c-str=%s, int=%d, long=0x%ux",
        &total,
        c"this is c str",
        123,
        0x456
    )
    .unwrap();
    assert_eq!(
        out,
        "stotal=hello world, c-str=this is c str, int=123, long=0x456"
    );
}

#[test]
fn free_functions_accept_str_and_bytes() {
    assert_eq!(render("%d%%", &[Arg::from(50)]).unwrap(), "50%");
    assert_eq!(render(b"%N".as_slice(), &[]).unwrap(), "\n");
}

#[test]
fn bounded_render_truncates_without_error() {
    let mut buf = [0u8; 10];
    let output = snprintf!(&mut buf, "%s-%s", "abcdef", "ghijkl").unwrap();
    assert_eq!(output.written(), 9);
    assert!(output.is_truncated());
    assert_eq!(&buf, b"abcdef-gh\0");

    let mut buf = [0u8; 10];
    let output = render_bounded(&mut buf, "%d", &[Arg::from(7)]).unwrap();
    assert_eq!(output.written(), 1);
    assert!(!output.is_truncated());
    assert_eq!(&buf[..2], b"7\0");
}

#[test]
fn errors_carry_the_directive_offset() {
    let err = sprintf!("abc %d").unwrap_err();
    assert_eq!(err.offset(), Some(4));
    assert!(err.to_string().contains("byte 4"));

    let err = sprintf!("", 1).unwrap_err();
    assert_eq!(err.offset(), None);
}
