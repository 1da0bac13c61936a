//! Form Engine - Element registry and parallel arrays.
//!
//! The engine manages the core data structures:
//! - Registry: Index allocation, ID mapping, parent context, lookups
//! - Arrays: Parallel arrays for element state
//!
//! # Architecture
//!
//! Elements are NOT objects. They are indices into parallel arrays:
//!
//! ```text
//! Index 0: Form   (parent=None, flags=NO_VALIDATE)
//! Index 1: Input  (parent=0, type=tel,      value="(11) 98765-4321")
//! Index 2: Input  (parent=0, type=password, flags=REQUIRED)
//! Index 3: Button (parent=0)
//! Index 4: Icon   (parent=3, classes=["fa", "fa-eye"])
//! ```
//!
//! Looking an element up by id is a hash lookup; everything else is a scan
//! over the allocated set in index order.

mod registry;
pub mod arrays;

pub use registry::*;
