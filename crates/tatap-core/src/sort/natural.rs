/// Natural-order comparison of filenames.
///
/// Stems are walked token by token: digit runs compare by value, everything
/// else compares ASCII case-insensitively. When the stems tie, extensions
/// decide byte-for-byte (case-sensitive). If either name has no extension the
/// effective-dot offsets decide instead.
///
/// # Known limitation
///
/// The offset tie-break is not transitive across names with and without an
/// extension: `"a"` equals both `"a.b"` and `"a.c"`, yet `"a.b" < "a.c"`.
/// [`sort_filenames`] copes with this; `slice::sort_by` may not.
use super::key::FilenameKey;
use super::tokens::{Token, TokenKind, Tokens};
use std::cmp::Ordering;

/// Maximum number of bytes compared within a single non-numeric token.
///
/// Tokens that agree on their first `MAX_TOKEN_COMPARE` bytes compare equal.
pub const MAX_TOKEN_COMPARE: usize = 255;

/// Compare two filenames in natural order.
pub fn compare_filenames(a: &str, b: &str) -> Ordering {
    let key_a = FilenameKey::parse(a);
    let key_b = FilenameKey::parse(b);

    match compare_stems(key_a.stem, key_b.stem) {
        Ordering::Equal => {}
        decided => return decided,
    }

    match (key_a.extension, key_b.extension) {
        (Some(ext_a), Some(ext_b)) => ext_a.as_bytes().cmp(ext_b.as_bytes()),
        _ => key_a.dot.cmp(&key_b.dot),
    }
}

fn compare_stems(a: &str, b: &str) -> Ordering {
    let mut tokens_a = Tokens::new(a);
    let mut tokens_b = Tokens::new(b);

    loop {
        let order = match (tokens_a.next(), tokens_b.next()) {
            (None, None) => return Ordering::Equal,
            // The exhausted (shorter) stem sorts first.
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ta), Some(tb)) => compare_tokens(ta, tb),
        };
        if order != Ordering::Equal {
            return order;
        }
    }
}

fn compare_tokens(a: Token<'_>, b: Token<'_>) -> Ordering {
    match (a.kind, b.kind) {
        (TokenKind::Digit, TokenKind::Digit) => compare_numeric(a.text, b.text),
        _ => compare_folded(a.text, b.text),
    }
}

/// Compare two ASCII digit runs by value, of any length.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_folded(a: &str, b: &str) -> Ordering {
    folded(a).cmp(folded(b))
}

fn folded(s: &str) -> impl Iterator<Item = u8> + '_ {
    s.bytes()
        .take(MAX_TOKEN_COMPARE)
        .map(|c| c.to_ascii_lowercase())
}

/// Sort `names` in natural order, keeping equal names in input order.
///
/// Uses a merge sort driven by [`compare_filenames`], which never panics on
/// the comparator's non-transitive ties.
pub fn sort_filenames<S: AsRef<str>>(names: &mut Vec<S>) {
    if names.len() < 2 {
        return;
    }
    let items = std::mem::take(names);
    *names = merge_sort(items);
}

fn merge_sort<S: AsRef<str>>(mut items: Vec<S>) -> Vec<S> {
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items);
    let right = merge_sort(right);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            // Ties go left so the sort is stable.
            (Some(l), Some(r)) => compare_filenames(l.as_ref(), r.as_ref()) != Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        merged.extend(if take_left { left.next() } else { right.next() });
    }

    merged
}
