use crate::utils::Float;
use std::cmp::Ordering;

/// Compares floating point numbers, putting NaN values at the end of the total order.
#[inline]
pub fn compare_floats(a: Float, b: Float) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => match (a.is_nan(), b.is_nan()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        },
    }
}
