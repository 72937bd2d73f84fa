//! Value → section index
//!
//! Built once per call while checking that no value is claimed twice. The
//! labeler uses it to recover which section produced each position of an
//! enumerated tuple, which is only unambiguous if every value is unique.

use crate::error::CombinationError;
use crate::types::Sections;
use rustc_hash::FxHashMap;

/// Borrowed lookup from each value to the section that owns it
#[derive(Debug)]
pub struct ValueIndex<'a> {
    owners: FxHashMap<&'a str, &'a str>,
}

impl<'a> ValueIndex<'a> {
    /// Index all values, failing on the first one seen twice
    ///
    /// Sections are scanned in order, values in order within a section. The
    /// error names the section being scanned and the section that claimed the
    /// value first (the same section if it repeats inside one list).
    pub fn build(sections: &'a Sections) -> Result<Self, CombinationError> {
        let capacity = sections.values().map(Vec::len).sum();
        let mut owners: FxHashMap<&'a str, &'a str> =
            FxHashMap::with_capacity_and_hasher(capacity, Default::default());

        for (section, values) in sections {
            for value in values {
                if let Some(first_section) = owners.get(value.as_str()) {
                    return Err(CombinationError::DuplicateValue {
                        value: value.clone(),
                        section: section.clone(),
                        first_section: first_section.to_string(),
                    });
                }
                owners.insert(value, section);
            }
        }

        Ok(ValueIndex { owners })
    }

    /// Section that owns `value`
    pub fn owner(&self, value: &str) -> Option<&'a str> {
        self.owners.get(value).copied()
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}
