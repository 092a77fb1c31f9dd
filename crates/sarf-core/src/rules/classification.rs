use super::letters::{has_hamza, is_weak_letter, ALIF, ALIF_MAQSURA, WAW, YA};
use crate::model::RootType;

/// Classify a root from its letters
///
/// The first matching rule wins:
/// HAMZATED > ASSIMILATED > HOLLOW > DEFECTIVE > WEAK > REGULAR.
/// Anything that is not exactly three letters is REGULAR.
pub fn detect_type(letters: &str) -> RootType {
    let chars: Vec<char> = letters.chars().collect();
    let [first, middle, last] = match chars.as_slice() {
        [a, b, c] => [*a, *b, *c],
        _ => return RootType::Regular,
    };

    if has_hamza(letters) {
        RootType::Hamzated
    } else if first == WAW {
        RootType::Assimilated
    } else if matches!(middle, WAW | YA | ALIF) {
        RootType::Hollow
    } else if matches!(last, WAW | YA | ALIF_MAQSURA) {
        RootType::Defective
    } else if chars.iter().any(|c| is_weak_letter(*c)) {
        RootType::Weak
    } else {
        RootType::Regular
    }
}
