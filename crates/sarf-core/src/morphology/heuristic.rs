//! Subsequence heuristic for the last validation tier
//!
//! Accepts any word that contains the three root letters in order, however
//! far apart. This trades precision for recall and yields false positives by
//! construction; callers see the match tagged as heuristic.

use super::substitution::SLOT_SPELLINGS;

/// Char positions of the root letters taken as an in-order subsequence
///
/// Letter 1 at its first occurrence, letter 2 at its first occurrence after
/// that, letter 3 likewise.
pub fn locate_root_letters(word: &str, letters: [char; 3]) -> Option<[usize; 3]> {
    let chars: Vec<char> = word.chars().collect();
    let mut positions = [0; 3];
    let mut from = 0;
    for (slot, letter) in letters.iter().enumerate() {
        let offset = chars[from..].iter().position(|c| c == letter)?;
        positions[slot] = from + offset;
        from = positions[slot] + 1;
    }
    Some(positions)
}

/// `word` with the located letters replaced by `C1`, `C2`, `C3`
pub fn synthesize_pattern(word: &str, positions: [usize; 3]) -> String {
    let [slots, ..] = SLOT_SPELLINGS;
    let mut pattern = String::with_capacity(word.len() + 6);
    for (i, c) in word.chars().enumerate() {
        match positions.iter().position(|p| *p == i) {
            Some(slot) => pattern.push_str(slots[slot]),
            None => pattern.push(c),
        }
    }
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    const KTB: [char; 3] = ['ك', 'ت', 'ب'];

    #[test]
    fn test_locates_in_order() {
        assert_eq!(locate_root_letters("مكتوب", KTB), Some([1, 2, 4]));
        assert_eq!(locate_root_letters("استكتاب", KTB), Some([3, 4, 6]));
    }

    #[test]
    fn test_first_occurrence_after_previous() {
        // the leading ت precedes ك and is skipped
        assert_eq!(locate_root_letters("تكتب", KTB), Some([1, 2, 3]));
    }

    #[test]
    fn test_missing_or_out_of_order() {
        assert_eq!(locate_root_letters("xyz", KTB), None);
        assert_eq!(locate_root_letters("بتك", KTB), None);
    }

    #[test]
    fn test_far_apart_letters_still_match() {
        assert!(locate_root_letters("كلمة تعبر", KTB).is_some());
    }

    #[test]
    fn test_synthesize_keeps_other_characters() {
        assert_eq!(synthesize_pattern("مكتوب", [1, 2, 4]), "مC1C2وC3");
        assert_eq!(synthesize_pattern("كَاتِب", [0, 3, 5]), "C1َاC2ِC3");
    }
}
