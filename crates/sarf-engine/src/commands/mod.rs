//! Command orchestration layer.
//!
//! ## Logging Ownership
//!
//! Commands own lifecycle logging:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! `sarf-core` and `sarf-store` use only `tracing::debug!()`/`warn!()` for
//! internal details.

pub mod derivation;
pub mod lexicon;

pub use derivation::{decompose, generate_word, root_family, validate_word};
pub use lexicon::{add_root, add_scheme, delete_scheme, modify_scheme};
