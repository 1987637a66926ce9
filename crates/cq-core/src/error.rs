//! Error types for capability queries.
//!
//! Every failure is returned to the immediate caller; nothing is swallowed,
//! logged away, or retried. Probe and version failures invalidate
//! construction; per-query failures leave the instance usable for other
//! pids.

use cq_abi::{AbiVersion, CapSet};
use thiserror::Error;

/// Result type alias for capability query operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for capability queries.
#[derive(Debug, Error)]
pub enum Error {
    /// The initial version probe failed at the kernel boundary.
    #[error("capability version probe failed: {source}")]
    Probe {
        #[source]
        source: std::io::Error,
    },

    /// The kernel reported a capability ABI magic this library predates.
    /// A fatal configuration condition; no layout is guessed.
    #[error("unsupported capability ABI version {raw:#010x}")]
    UnsupportedVersion { raw: u32 },

    /// Target process does not exist.
    #[error("process {pid} not found")]
    ProcessNotFound { pid: i32 },

    /// Caller may not inspect the target process.
    #[error("permission denied querying capabilities of process {pid}")]
    PermissionDenied { pid: i32 },

    /// A per-query kernel call failed for a reason other than the two above.
    #[error("capability query for process {pid} failed: {source}")]
    Query {
        pid: i32,
        #[source]
        source: std::io::Error,
    },

    /// The requested set does not exist in the instance's ABI version.
    /// A usage error: version 1 kernels have no bounding or ambient sets.
    #[error("the {set} set is not part of the version {version} capability ABI")]
    InvalidSetForVersion { set: CapSet, version: AbiVersion },

    /// Capability index above the version's representable range.
    #[error("capability index {capability} out of range (max {max})")]
    CapabilityOutOfRange { capability: u32, max: u32 },
}

impl Error {
    /// Map an I/O failure from a per-query call onto the taxonomy.
    pub(crate) fn from_query_failure(pid: i32, source: std::io::Error) -> Self {
        match source.raw_os_error() {
            // ENOENT covers the procfs path racing a process exit.
            Some(libc::ESRCH) | Some(libc::ENOENT) => Error::ProcessNotFound { pid },
            Some(libc::EPERM) | Some(libc::EACCES) => Error::PermissionDenied { pid },
            _ => Error::Query { pid, source },
        }
    }
}
