use serde::{Deserialize, Serialize};

/// Morphological class of a triliteral root
///
/// Derived from the root letters by `rules::classification::detect_type`;
/// never set independently of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RootType {
    /// Sound root with no weak letter and no hamza (كتب)
    Regular,
    /// Weak letter present but in no position with its own class
    Weak,
    /// Contains a hamza in any seat (أخذ, سأل)
    Hamzated,
    /// First letter is waw (وعد)
    Assimilated,
    /// Middle letter is waw, ya or alif (قول, بيع)
    Hollow,
    /// Last letter is waw, ya or alif maqsura (رمي, دعو)
    Defective,
}

impl RootType {
    pub const ALL: [RootType; 6] = [
        RootType::Regular,
        RootType::Weak,
        RootType::Hamzated,
        RootType::Assimilated,
        RootType::Hollow,
        RootType::Defective,
    ];

    /// Stable upper-case label used in synthesized scheme names and output
    pub fn as_str(&self) -> &'static str {
        match self {
            RootType::Regular => "REGULAR",
            RootType::Weak => "WEAK",
            RootType::Hamzated => "HAMZATED",
            RootType::Assimilated => "ASSIMILATED",
            RootType::Hollow => "HOLLOW",
            RootType::Defective => "DEFECTIVE",
        }
    }
}

impl std::fmt::Display for RootType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
