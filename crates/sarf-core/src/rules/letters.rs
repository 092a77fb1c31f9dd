//! Arabic letter classes used by classification and matching

pub const ALIF: char = 'ا';
pub const WAW: char = 'و';
pub const YA: char = 'ي';
pub const ALIF_MAQSURA: char = 'ى';

/// Hamza alone and on every seat
pub const HAMZA_FORMS: [char; 6] = ['ء', 'أ', 'إ', 'آ', 'ؤ', 'ئ'];

/// Weak letters as counted for the WEAK fallback class
pub const WEAK_LETTERS: [char; 3] = [ALIF, WAW, YA];

/// Arabic block, U+0600..=U+06FF
pub fn is_arabic_letter(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

pub fn is_hamza(c: char) -> bool {
    HAMZA_FORMS.contains(&c)
}

pub fn is_weak_letter(c: char) -> bool {
    WEAK_LETTERS.contains(&c)
}

/// Harakat, tanwin, shadda and sukun (U+064B..=U+065F)
pub fn is_diacritic(c: char) -> bool {
    ('\u{064B}'..='\u{065F}').contains(&c)
}

pub fn has_hamza(letters: &str) -> bool {
    letters.chars().any(is_hamza)
}

pub fn count_weak_letters(letters: &str) -> usize {
    letters.chars().filter(|c| is_weak_letter(*c)).count()
}

/// Exactly three letters, all from the Arabic block
pub fn is_valid_triliteral_root(letters: &str) -> bool {
    letters.chars().count() == 3 && letters.chars().all(is_arabic_letter)
}

pub fn strip_diacritics(text: &str) -> String {
    text.chars().filter(|c| !is_diacritic(*c)).collect()
}
