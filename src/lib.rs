//! Longest-match lookups over IP prefixes.
//!
//! ```
//! use prefix_tree::{Family, PrefixOps, PrefixTree, Range};
//!
//! let mut tree = PrefixTree::new(16).unwrap();
//! tree.insert(Range::new("10.0.0.0/8", Family::Ipv4, "corp").unwrap()).unwrap();
//! tree.insert(Range::new("10.1.0.0/16", Family::Ipv4, "lab").unwrap()).unwrap();
//!
//! let point = Range::new("10.1.2.3", Family::Ipv4, ()).unwrap();
//! assert_eq!(tree.search(&point).unwrap(), Some(&"lab"));
//! ```

pub mod config;
pub mod index;

/// Ranges and address families
mod data;
mod error;

pub use config::{PrefixMode, TreeConfig, DEFAULT_ARITY};
pub use data::{Family, Range};
pub use error::{PrefixTreeError, Result};
pub use index::tree::PrefixTree;
pub use index::PrefixOps;
