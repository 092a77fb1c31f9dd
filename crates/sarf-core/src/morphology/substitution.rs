//! Placeholder substitution
//!
//! Three spellings name the consonant slots: `C1 C2 C3`, the legacy
//! `ف1 ف2 ف3`, and bare digits `1 2 3`. They are replaced in that order, so
//! a bare digit is only ever seen after both token spellings are gone. A
//! literal digit elsewhere in a pattern is still consumed by the last pass.

pub const SLOT_SPELLINGS: [[&str; 3]; 3] = [
    ["C1", "C2", "C3"],
    ["ف1", "ف2", "ف3"],
    ["1", "2", "3"],
];

/// Separator allowed between pattern pieces; removed from the output
pub const SEPARATOR: char = '+';

/// Fill the slots of `pattern` with `letters` and drop whitespace and `+`
pub fn substitute(pattern: &str, letters: [char; 3]) -> String {
    let mut word = pattern.to_string();
    for spelling in SLOT_SPELLINGS {
        for (slot, letter) in spelling.iter().zip(letters) {
            word = word.replace(slot, letter.encode_utf8(&mut [0; 4]));
        }
    }
    word.retain(|c| !c.is_whitespace() && c != SEPARATOR);
    word
}
