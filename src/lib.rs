//! An ordered record dictionary based on an unbalanced binary search tree.
//!
//! [`Map`] is the tree itself: a generic ordered map whose shape follows insertion order and
//! which tolerates duplicate keys. [`RecordMap`] specializes it to [`Record`]s keyed by their
//! string identifier.
//!
//! ```
//! use search_tree::{Record, RecordMap};
//!
//! let mut records = RecordMap::default();
//!
//! for id in ["B", "A", "D", "C", "F"] {
//!     records.insert_record(Record::new(id)?);
//! }
//!
//! records.remove("B");
//! records.remove("F");
//!
//! let ids: Vec<&str> = records.values().map(Record::id).collect();
//! assert_eq!(ids, ["A", "C", "D"]);
//! # Ok::<(), search_tree::RecordError>(())
//! ```

pub mod map;
pub mod record;

#[cfg(feature = "ordered_iter")]
mod ordered_iter;

#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use map::Map;
pub use record::{Lexical, Record, RecordError, RecordMap};
