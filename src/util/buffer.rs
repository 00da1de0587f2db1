//! Bounded history buffers.

/// Returns a new list with `item` appended, dropping the oldest entries
/// from the front while the list is longer than `max`.
///
/// `None` or `Some(0)` means unbounded.
pub fn add_to_end<T: Clone>(items: &[T], item: T, max: Option<usize>) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len() + 1);
    out.extend_from_slice(items);
    out.push(item);
    if let Some(max) = max.filter(|&m| m > 0) {
        if out.len() > max {
            out.drain(..out.len() - max);
        }
    }
    out
}

/// Returns a new list with `item` prepended, dropping entries from the back
/// while the list is longer than `max`.
///
/// `None` or `Some(0)` means unbounded.
pub fn add_to_start<T: Clone>(items: &[T], item: T, max: Option<usize>) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len() + 1);
    out.push(item);
    out.extend_from_slice(items);
    if let Some(max) = max.filter(|&m| m > 0) {
        out.truncate(max);
    }
    out
}
