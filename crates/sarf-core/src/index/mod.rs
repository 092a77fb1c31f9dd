//! In-memory index structures: the AVL root index and the chained scheme
//! hash table. Both report outcomes as `bool`/`Option`; their structural
//! invariants are maintained internally and never surface as errors.

pub mod root_index;
pub mod scheme_table;

pub use root_index::{OrderedRootIndex, RootNode, Roots};
pub use scheme_table::{SchemeTable, Schemes, DEFAULT_CAPACITY, MAX_LOAD_FACTOR};
