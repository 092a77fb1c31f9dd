use serde::{Deserialize, Serialize};

/// A named morphological pattern
///
/// The pattern holds three positional placeholders (`C1`, `C2`, `C3`, or the
/// equivalent `ف1 ف2 ف3` / `1 2 3` spellings) surrounded by literal letters,
/// diacritics and optional `+` separators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeEntity {
    name: String,
    pattern: String,
}

impl SchemeEntity {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Replace the pattern in place; the name (table key) never changes
    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.pattern = pattern.into();
    }
}

impl std::fmt::Display for SchemeEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ← {}", self.name, self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_pattern_keeps_name() {
        let mut scheme = SchemeEntity::new("فاعل", "C1اC2C3");
        scheme.set_pattern("C1ا+C2+C3");

        assert_eq!(scheme.name(), "فاعل");
        assert_eq!(scheme.pattern(), "C1ا+C2+C3");
    }

    #[test]
    fn test_display() {
        let scheme = SchemeEntity::new("مفعول", "مC1C2وC3");
        assert_eq!(scheme.to_string(), "مفعول ← مC1C2وC3");
    }
}
