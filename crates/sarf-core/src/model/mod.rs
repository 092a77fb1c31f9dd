pub mod root;
pub mod root_type;
pub mod scheme;
pub mod validation;

pub use root::{RootEntity, ROOT_LEN};
pub use root_type::RootType;
pub use scheme::SchemeEntity;
pub use validation::{Explanation, MatchSource, PatternLabel, ValidationResult};
