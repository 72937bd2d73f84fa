//! Shared data types
//!
//! Both maps are insertion-ordered: section order and value order decide the
//! enumeration order, and each combination lists its sections in input order.

use indexmap::IndexMap;

/// Section name → candidate values, in input order
pub type Sections = IndexMap<String, Vec<String>>;

/// One full selection: section name → chosen value, in section order
pub type Combination = IndexMap<String, String>;
