//! Combination Generator
//!
//! Cartesian product of labeled string sets, with every value unique across
//! all sets. Each combination is a record keyed by section name.
//!
//! Module layout:
//! - `types`: `Sections` input and `Combination` output (insertion-ordered)
//! - `validation`: section key checks, untyped JSON boundary
//! - `value_index`: value → section lookup, rejects duplicate values
//! - `product`: iterative Cartesian product in odometer order
//! - `generator`: `generate` / `count_combinations` and JSON entry points
//! - `error`: error types
//!
//! ```
//! use combination_generator::{generate, Sections};
//!
//! let mut sections = Sections::new();
//! sections.insert("color".into(), vec!["red".into(), "blue".into()]);
//! sections.insert("size".into(), vec!["S".into(), "M".into()]);
//!
//! let combinations = generate(&sections).unwrap();
//! assert_eq!(combinations.len(), 4);
//! assert_eq!(combinations[1]["color"], "red");
//! assert_eq!(combinations[1]["size"], "M");
//! ```

pub mod error;
pub mod generator;
pub mod product;
pub mod types;
pub mod validation;
pub mod value_index;

// Re-export commonly used types
pub use error::{CombinationError, ErrorKind, ValidationError};
pub use generator::{
    count_combinations, count_combinations_json, generate, generate_json, parse_sections,
};
pub use types::{Combination, Sections};
pub use validation::{is_numeric_key, sections_from_json, validate};
pub use value_index::ValueIndex;
