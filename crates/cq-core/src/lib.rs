//! Linux process capability queries.
//!
//! Answers "is capability N in set K for process P?" against the kernel's
//! versioned capability ABI:
//! - One version probe at construction; ABI versions 1, 2, and 3 are
//!   understood, anything else fails construction
//! - Per-query refresh through capget(2) (plus the procfs capability lines
//!   for the bounding and ambient sets), so results are never stale
//! - Errno-mapped errors surfaced to the caller; nothing is swallowed or
//!   retried
//!
//! Capability indices are opaque integers owned by the kernel headers
//! (`CAP_CHOWN` = 0, `CAP_NET_BIND_SERVICE` = 10, ...); this crate
//! hard-codes no capability list.
//!
//! ```no_run
//! use cq_core::{CapQuery, CapSet};
//!
//! let mut caps = CapQuery::new()?;
//! let can_bind = caps.is_set_for_self(10, CapSet::Effective)?;
//! # Ok::<(), cq_core::Error>(())
//! ```

pub mod error;
pub mod query;
pub mod sys;

pub use cq_abi::{AbiVersion, CapSet};
pub use error::{Error, Result};
pub use query::CapQuery;
pub use sys::{CapSource, ExtendedSets, KernelSource};
