//! Tree lookup and manipulation

mod delete;
pub(crate) use delete::*;

mod insert;
pub(crate) use insert::*;
pub use insert::InsertError;

mod lookup;
pub(crate) use lookup::*;


/// Compare `a` against `b` symbol by symbol from the start, and report how
/// much of them matched.
///
/// The sign of the result classifies the match:
///  - a positive `k` means the first `k` symbols are equal, and either `a` is
///    fully consumed (`k == a.len()`, which includes `a == b`) or the two
///    sequences diverge at `k`.
///  - zero means the first symbols differ, or either sequence is empty.
///  - a negative `-k` means `b` is a strict prefix of `a`, and `k` symbols of
///    `a` remain after the end of `b`.
///
/// # Examples
///
/// ```rust
/// use radix_set::match_prefix;
///
/// let m = |a: &str, b: &str| {
///     let a: Vec<char> = a.chars().collect();
///     let b: Vec<char> = b.chars().collect();
///     match_prefix(&a, &b)
/// };
///
/// assert_eq!(m("apple", "pear"), 0);
/// assert_eq!(m("apple", "appliance"), 4);
/// assert_eq!(m("cards", "cards"), 5);
/// assert_eq!(m("cards", "card"), -1);
/// assert_eq!(m("cardistry", "card"), -5);
/// assert_eq!(m("", "blah"), 0);
/// ```
pub fn match_prefix<S: PartialEq>(a: &[S], b: &[S]) -> isize {
    let matched = a.iter().zip(b).take_while(|(x, y)| x == y).count();

    if matched == a.len() || matched < b.len() {
        // `a` is consumed, or the sequences diverge at `matched`
        matched as isize
    } else if matched == 0 {
        // `b` is empty
        0
    } else {
        -((a.len() - matched) as isize)
    }
}

/// How an edge label relates to the unmatched remainder of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EdgeMatch {
    /// The label and the key do not share a first symbol.
    Miss,
    /// The whole label is a prefix of the key, containing this many symbols.
    Full(usize),
    /// The label and the key share this many symbols, then both continue with
    /// different symbols.
    Partial(usize),
    /// The key is a strict prefix of the label, ending at this offset into
    /// the label.
    Over(usize),
}

impl EdgeMatch {
    /// Classify the result of [`match_prefix`] for an edge label and the
    /// remaining key.
    pub(crate) fn classify<S: PartialEq>(label: &[S], rest: &[S]) -> Self {
        let matched = match_prefix(label, rest);

        match matched {
            0 => EdgeMatch::Miss,
            m if m > 0 && m.unsigned_abs() == label.len() => EdgeMatch::Full(label.len()),
            m if m > 0 => EdgeMatch::Partial(m.unsigned_abs()),
            m => EdgeMatch::Over(label.len() - m.unsigned_abs()),
        }
    }
}
