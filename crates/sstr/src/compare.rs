//! crates/sstr/src/compare.rs
//!
//! Byte-wise ordering and equality for [`SStr`].
//!
//! Ordering is lexicographic over unsigned bytes; when one string is a prefix
//! of the other the longer one orders after it. No case folding or collation
//! is applied.

use std::cmp::Ordering;
use std::ffi::CStr;
use std::hash::{Hash, Hasher};

use crate::buffer::SStr;
use crate::nul_terminated_prefix;

impl SStr {
    /// Compares the content of `self` with `other`.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }

    /// Compares the content of `self` with the bytes of `text`.
    #[must_use]
    pub fn compare_c_str(&self, text: &CStr) -> Ordering {
        self.as_bytes().cmp(text.to_bytes())
    }

    /// Compares the content of `self` with the bytes of `bytes` preceding its
    /// first zero byte.
    #[must_use]
    pub fn compare_nul_terminated(&self, bytes: &[u8]) -> Ordering {
        self.as_bytes().cmp(nul_terminated_prefix(bytes))
    }
}

impl PartialEq for SStr {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for SStr {}

impl PartialOrd for SStr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SStr {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for SStr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl PartialEq<[u8]> for SStr {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for SStr {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for SStr {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_bytes() == other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for SStr {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialEq<str> for SStr {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for SStr {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sstr(text: &str) -> SStr {
        SStr::try_from(text).expect("allocation succeeds")
    }

    #[test]
    fn equal_content_compares_equal() {
        assert_eq!(sstr("hello").compare(&sstr("hello")), Ordering::Equal);
        assert_eq!(sstr("hello"), sstr("hello"));
    }

    #[test]
    fn first_mismatch_decides() {
        assert_eq!(sstr("abd").compare(&sstr("abc")), Ordering::Greater);
        assert_eq!(sstr("abc").compare(&sstr("abd")), Ordering::Less);
    }

    #[test]
    fn longer_string_orders_after_its_prefix() {
        assert_eq!(sstr("hello").compare(&sstr("hell")), Ordering::Greater);
        assert_eq!(sstr("hell").compare(&sstr("hello")), Ordering::Less);
        assert_eq!(sstr("").compare(&sstr("a")), Ordering::Less);
    }

    #[test]
    fn bytes_compare_unsigned() {
        let high = SStr::from_bytes(&[0xff]).expect("allocation succeeds");
        let low = SStr::from_bytes(&[0x01]).expect("allocation succeeds");

        assert_eq!(high.compare(&low), Ordering::Greater);
    }

    #[test]
    fn comparison_is_case_sensitive() {
        assert_ne!(sstr("Hello"), sstr("hello"));
        assert_eq!(sstr("Hello").compare(&sstr("hello")), Ordering::Less);
    }

    #[test]
    fn embedded_zero_participates_in_comparison() {
        let with_zero = SStr::from_bytes(b"ab\0c").expect("allocation succeeds");

        assert_eq!(with_zero.compare(&sstr("ab")), Ordering::Greater);
        assert_ne!(with_zero, sstr("ab"));
    }

    #[test]
    fn compare_with_c_string() {
        let text = c"hello";

        assert_eq!(sstr("hello").compare_c_str(text), Ordering::Equal);
        assert_eq!(sstr("hello!").compare_c_str(text), Ordering::Greater);
        assert_eq!(sstr("hell").compare_c_str(text), Ordering::Less);
    }

    #[test]
    fn compare_with_nul_terminated_bytes_stops_at_terminator() {
        assert_eq!(
            sstr("abc").compare_nul_terminated(b"abc\0ignored"),
            Ordering::Equal
        );
        assert_eq!(sstr("abc").compare_nul_terminated(b"abc"), Ordering::Equal);
    }

    #[test]
    fn comparison_ignores_storage_mode() {
        let long = "x".repeat(40);
        let mut cleared = sstr(&long);
        cleared.clear();
        cleared.append_bytes(b"short").expect("append succeeds");

        assert!(!cleared.is_inline());
        assert_eq!(cleared, sstr("short"));
    }

    #[test]
    fn equality_with_slices_and_strs() {
        let value = sstr("bytes");

        assert_eq!(value, *b"bytes");
        assert_eq!(value, b"bytes");
        assert_eq!(value, "bytes");
        assert!(value == *"bytes");
        assert_eq!(value, &b"bytes"[..]);
    }

    #[test]
    fn hash_matches_for_equal_content() {
        use std::collections::HashSet;

        let long = "y".repeat(30);
        let mut heap_backed = sstr(&long);
        heap_backed.clear();
        heap_backed.append_bytes(b"key").expect("append succeeds");

        let mut set = HashSet::new();
        set.insert(sstr("key"));
        assert!(set.contains(&heap_backed));
    }
}
