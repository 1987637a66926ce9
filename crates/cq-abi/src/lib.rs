//! Linux capability ABI layouts and bit-level decoding.
//!
//! This crate owns the user-space side of the kernel capability ABI:
//! - The three historical ABI versions and their magic constants
//! - The five logical capability set kinds
//! - `#[repr(C)]` mirrors of the kernel's capability header and data structs
//! - Versioned snapshot variants with pure bit-test predicates
//!
//! Decoding is total bit arithmetic with no fallible operations. Validation
//! of capability indices and set availability belongs to the query layer
//! (`cq-core`), which rejects out-of-range requests before delegating here.

pub mod layout;
pub mod set;

pub use layout::{CapUserData, CapUserHeader, Snapshot, SnapshotV1, SnapshotV3};
pub use set::{AbiVersion, CapSet};
