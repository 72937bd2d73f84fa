//! Cartesian product enumeration
//!
//! Odometer order: the last set cycles fastest. Built as a left fold, each
//! step pairing every tuple collected so far with every value of the next set,
//! so the number of sets never affects stack depth.

use itertools::Itertools;

/// Every way to pick one element from each set, in odometer order
///
/// No sets gives no tuples. A single set gives one single-element tuple per
/// element. Any empty set empties the whole product.
pub fn cartesian_product<T, S>(sets: &[S]) -> Vec<Vec<&T>>
where
    S: AsRef<[T]>,
{
    if sets.is_empty() {
        return Vec::new();
    }

    sets.iter().fold(vec![Vec::new()], |acc, set| {
        let set = set.as_ref();
        tracing::trace!(tuples = acc.len(), width = set.len(), "extending product");
        acc.iter()
            .cartesian_product(set.iter())
            .map(|(prefix, value)| {
                let mut tuple = Vec::with_capacity(prefix.len() + 1);
                tuple.extend_from_slice(prefix);
                tuple.push(value);
                tuple
            })
            .collect()
    })
}

/// Number of tuples `cartesian_product` yields for sets of these sizes
///
/// `None` on overflow. No sets gives 0.
pub fn product_len<I>(lens: I) -> Option<usize>
where
    I: IntoIterator<Item = usize>,
{
    let mut lens = lens.into_iter().peekable();
    if lens.peek().is_none() {
        return Some(0);
    }
    lens.try_fold(1usize, |acc, len| acc.checked_mul(len))
}
