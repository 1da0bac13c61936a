//! Form Engine - Parallel Arrays
//!
//! All element state lives in these parallel arrays.
//! Each array index corresponds to one element.
//!
//! # Array Categories
//!
//! - **core**: Element kind, parent, flags
//! - **field**: Value, input type, name, validity constraints
//! - **attrs**: Class list, attributes, inline style

pub mod core;
pub mod field;
pub mod attrs;

use self::core as core_arrays;
use self::field as field_arrays;
use self::attrs as attrs_arrays;

/// Ensure all arrays have capacity for the given index.
///
/// Called by registry when allocating.
pub fn ensure_all_capacity(index: usize) {
    core_arrays::ensure_capacity(index);
    field_arrays::ensure_capacity(index);
    attrs_arrays::ensure_capacity(index);
}

/// Clear all array values at the given index.
///
/// Called by registry when releasing.
pub fn clear_all_at_index(index: usize) {
    core_arrays::clear_at_index(index);
    field_arrays::clear_at_index(index);
    attrs_arrays::clear_at_index(index);
}

/// Reset all arrays to empty.
pub fn reset_all_arrays() {
    core_arrays::reset();
    field_arrays::reset();
    attrs_arrays::reset();
}
