//! Checking and generating chiasmus sequences.
//!
//! A chiasmus is a sequence that reads the same forwards as backwards - a
//! palindrome generalized to arbitrary element types rather than characters.

/// Returns true if the sequence equals its own reverse.
///
/// Equivalently: the first half equals the reverse of the second half. For
/// odd lengths the middle element mirrors itself and is not compared.
pub fn is_chiasmus<T: PartialEq>(elems: &[T]) -> bool {
    let half = elems.len() / 2;
    let head = &elems[..half];
    let tail = &elems[elems.len() - half..];
    head.iter().eq(tail.iter().rev())
}

/// Builds a chiasmus from a scheme: `scheme + center + reverse(scheme)`.
///
/// The center may be empty, a single pivot element, or any sequence. The
/// result has length `2 * scheme.len() + center.len()` and is itself a
/// chiasmus whenever the center is one.
pub fn generate_chiasmus<T: Clone>(scheme: &[T], center: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(2 * scheme.len() + center.len());
    result.extend_from_slice(scheme);
    result.extend_from_slice(center);
    result.extend(scheme.iter().rev().cloned());
    result
}
