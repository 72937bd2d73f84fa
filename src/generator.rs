//! Combination generation
//!
//! Pipeline for one call: validate keys → index values (uniqueness) →
//! enumerate the product of the value lists → label each tuple by section.
//! Everything lives on the stack of the call; nothing is shared between calls.

use crate::error::CombinationError;
use crate::product::{cartesian_product, product_len};
use crate::types::{Combination, Sections};
use crate::validation::{sections_from_json, validate};
use crate::value_index::ValueIndex;
use serde_json::Value;
use tracing::{debug, warn};

/// Every combination of one value per section, in odometer order
///
/// The last section varies fastest. No sections gives an empty result, and a
/// single section gives one single-entry combination per value.
///
/// # Errors
/// - `InvalidInput` wrapping `InvalidSectionKey` for a numeric section name
/// - `DuplicateValue` if any value appears twice
/// - `CountOverflow` if the result size does not fit in `usize`
pub fn generate(sections: &Sections) -> Result<Vec<Combination>, CombinationError> {
    validate(sections)?;
    let index = ValueIndex::build(sections)?;

    let expected = product_len(sections.values().map(Vec::len))
        .ok_or(CombinationError::CountOverflow)?;
    debug!(
        sections = sections.len(),
        values = index.len(),
        combinations = expected,
        "generating combinations"
    );

    let value_sets: Vec<&[String]> = sections.values().map(Vec::as_slice).collect();
    let combinations: Vec<Combination> = cartesian_product(&value_sets)
        .into_iter()
        .map(|tuple| label(&tuple, &index))
        .collect();

    debug_assert_eq!(combinations.len(), expected);
    Ok(combinations)
}

/// Number of combinations `generate` would return, without enumerating them
///
/// Fails the same way `generate` does, including `DuplicateValue`.
pub fn count_combinations(sections: &Sections) -> Result<usize, CombinationError> {
    if sections.is_empty() {
        return Ok(0);
    }

    validate(sections)?;
    ValueIndex::build(sections)?;

    product_len(sections.values().map(Vec::len)).ok_or(CombinationError::CountOverflow)
}

/// Validate untyped JSON, then generate
pub fn generate_json(input: &Value) -> Result<Vec<Combination>, CombinationError> {
    let sections = sections_from_json(input)?;
    generate(&sections)
}

/// Validate untyped JSON, then count
pub fn count_combinations_json(input: &Value) -> Result<usize, CombinationError> {
    let sections = sections_from_json(input)?;
    count_combinations(&sections)
}

/// Parse JSON text into validated `Sections`
pub fn parse_sections(json: &str) -> Result<Sections, CombinationError> {
    let value: Value = serde_json::from_str(json)?;
    Ok(sections_from_json(&value)?)
}

/// Key each value of an enumerated tuple by its owning section
fn label(tuple: &[&String], index: &ValueIndex<'_>) -> Combination {
    tuple
        .iter()
        .map(|&value| {
            let key = match index.owner(value) {
                Some(section) => section.to_string(),
                None => {
                    // Unreachable after ValueIndex::build over the same input
                    warn!(value = %value, "value has no owning section, keying by value");
                    value.clone()
                }
            };
            (key, value.clone())
        })
        .collect()
}
