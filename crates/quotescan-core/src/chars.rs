//! Case-fold-aware single character comparison.

use crate::scan::CaseMode;

/// Compare two characters after simple uppercase folding.
///
/// This is not locale-aware: each side is mapped through
/// [`char::to_uppercase`] and the resulting sequences are compared, so
/// `'ß'` folds to `"SS"` and only equals itself.
pub fn equals_fold(a: char, b: char) -> bool {
    a == b || a.to_uppercase().eq(b.to_uppercase())
}

pub fn equals_with_mode(a: char, b: char, case: CaseMode) -> bool {
    match case {
        CaseMode::Insensitive => equals_fold(a, b),
        CaseMode::Sensitive => a == b,
    }
}

/// True when any member of `set` equals `c` under `case`.
pub fn contains_with_mode(set: &[char], c: char, case: CaseMode) -> bool {
    set.iter().any(|&s| equals_with_mode(s, c, case))
}
