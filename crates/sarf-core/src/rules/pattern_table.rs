//! Per-type pattern tables
//!
//! Each root type maps to a fixed, ordered list of `(scheme-name, pattern)`
//! pairs. Patterns use `C1 C2 C3` for the root consonant slots. Weak-root
//! tables drop or rewrite the slot a weak letter would occupy.

use crate::model::RootType;

/// One named pattern of a type table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternEntry {
    pub name: &'static str,
    pub pattern: &'static str,
}

const fn entry(name: &'static str, pattern: &'static str) -> PatternEntry {
    PatternEntry { name, pattern }
}

/// Agent noun name, shared by every table
pub const AGENT: &str = "فاعل";
/// Patient noun name, shared by every table
pub const PATIENT: &str = "مفعول";

static REGULAR_PATTERNS: [PatternEntry; 11] = [
    entry(AGENT, "C1اC2C3"),
    entry(PATIENT, "مC1C2وC3"),
    entry("فعّال", "C1C2ّاC3"),
    entry("مفعل", "مC1C2C3"),
    entry("مفعلة", "مC1C2C3ة"),
    entry("فعيل", "C1C2يC3"),
    entry("فعول", "C1C2وC3"),
    entry("تفعيل", "تC1C2يC3"),
    entry("افتعال", "اC1تC2اC3"),
    entry("انفعال", "انC1C2اC3"),
    entry("استفعال", "استC1C2اC3"),
];

// Hamza changes its seat, not the skeleton, so the sound shapes apply.
static HAMZATED_PATTERNS: [PatternEntry; 8] = [
    entry(AGENT, "C1اC2C3"),
    entry(PATIENT, "مC1C2وC3"),
    entry("فعّال", "C1C2ّاC3"),
    entry("مفعل", "مC1C2C3"),
    entry("فعيل", "C1C2يC3"),
    entry("تفعيل", "تC1C2يC3"),
    entry("افتعال", "اC1تC2اC3"),
    entry("استفعال", "استC1C2اC3"),
];

// Initial waw drops (عدة), assimilates (اتّعاد) or turns to ya (استيعاد).
static ASSIMILATED_PATTERNS: [PatternEntry; 10] = [
    entry(AGENT, "C1اC2C3"),
    entry(PATIENT, "مC1C2وC3"),
    entry("مفعل", "مC1C2C3"),
    entry("مفعلة", "مC1C2C3ة"),
    entry("فعيل", "C1C2يC3"),
    entry("فعّال", "C1C2ّاC3"),
    entry("تفعيل", "تC1C2يC3"),
    entry("علة", "C2C3ة"),
    entry("افتعال", "اتّC2اC3"),
    entry("استفعال", "استيC2اC3"),
];

// Medial weak letter becomes a long vowel or a hamza on its seat.
static HOLLOW_PATTERNS: [PatternEntry; 10] = [
    entry(AGENT, "C1ائC3"),
    entry(PATIENT, "مC1C2C3"),
    entry("مفعل", "مC1اC3"),
    entry("مفعلة", "مC1اC3ة"),
    entry("فعّال", "C1C2ّاC3"),
    entry("تفعيل", "تC1C2يC3"),
    entry("إفعال", "إC1اC3ة"),
    entry("افتعال", "اC1تياC3"),
    entry("انفعال", "انC1ياC3"),
    entry("استفعال", "استC1اC3ة"),
];

// Final weak letter surfaces as ya, alif maqsura or hamza.
static DEFECTIVE_PATTERNS: [PatternEntry; 9] = [
    entry(AGENT, "C1اC2ي"),
    entry(PATIENT, "مC1C2يّ"),
    entry("مفعل", "مC1C2ى"),
    entry("فعّال", "C1C2ّاء"),
    entry("فعيل", "C1C2يّ"),
    entry("تفعيل", "تC1C2ية"),
    entry("افتعال", "اC1تC2اء"),
    entry("انفعال", "انC1C2اء"),
    entry("استفعال", "استC1C2اء"),
];

/// The pattern table for a root type
pub fn patterns_for(root_type: RootType) -> &'static [PatternEntry] {
    match root_type {
        RootType::Regular | RootType::Weak => &REGULAR_PATTERNS[..],
        RootType::Hamzated => &HAMZATED_PATTERNS[..],
        RootType::Assimilated => &ASSIMILATED_PATTERNS[..],
        RootType::Hollow => &HOLLOW_PATTERNS[..],
        RootType::Defective => &DEFECTIVE_PATTERNS[..],
    }
}

/// Pattern registered under `name` for `root_type`
pub fn lookup(root_type: RootType, name: &str) -> Option<&'static str> {
    patterns_for(root_type)
        .iter()
        .find(|e| e.name == name)
        .map(|e| e.pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_table_has_agent_and_patient() {
        for root_type in RootType::ALL {
            assert!(lookup(root_type, AGENT).is_some(), "{} lacks agent", root_type);
            assert!(lookup(root_type, PATIENT).is_some(), "{} lacks patient", root_type);
        }
    }

    #[test]
    fn test_every_table_has_six_or_more_derived_forms() {
        for root_type in RootType::ALL {
            let derived = patterns_for(root_type)
                .iter()
                .filter(|e| e.name != AGENT && e.name != PATIENT)
                .count();
            assert!((6..=10).contains(&derived), "{}: {}", root_type, derived);
        }
    }

    #[test]
    fn test_names_unique_within_table() {
        for root_type in RootType::ALL {
            let table = patterns_for(root_type);
            let names: HashSet<_> = table.iter().map(|e| e.name).collect();
            assert_eq!(names.len(), table.len());
        }
    }

    #[test]
    fn test_weak_shares_regular_table() {
        assert_eq!(
            patterns_for(RootType::Weak).as_ptr(),
            patterns_for(RootType::Regular).as_ptr()
        );
    }

    #[test]
    fn test_hollow_agent_drops_medial_slot() {
        let agent = lookup(RootType::Hollow, AGENT).unwrap();
        assert!(!agent.contains("C2"));
        assert!(agent.contains("C1") && agent.contains("C3"));
    }
}
