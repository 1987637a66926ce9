//! Capability query facade.
//!
//! [`CapQuery`] probes the kernel's capability ABI version once at
//! construction and holds it for the life of the instance. Every query
//! re-issues the kernel call for the target pid and overwrites the held
//! snapshot in place, so capability changes in the target (exec, dropped
//! privileges) are always observed; nothing is served stale.

use cq_abi::{AbiVersion, CapSet, CapUserData, CapUserHeader, Snapshot, SnapshotV1, SnapshotV3};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::sys::{CapSource, KernelSource};

/// Capability state query handle for one probed ABI version.
///
/// Queries take `&mut self` because the snapshot is overwritten per call;
/// concurrent use of one instance is serialized by the borrow rules, and
/// distinct instances are fully independent.
#[derive(Debug)]
pub struct CapQuery<S = KernelSource> {
    source: S,
    version: AbiVersion,
    snapshot: Snapshot,
}

impl CapQuery<KernelSource> {
    /// Probe the running kernel's capability ABI version.
    pub fn new() -> Result<Self> {
        Self::with_source(KernelSource)
    }
}

impl<S: CapSource> CapQuery<S> {
    /// Probe the capability ABI version through `source`.
    ///
    /// The probe issues the query call with a null data buffer; the kernel
    /// answers by writing its preferred version magic into the header. Fails
    /// with [`Error::UnsupportedVersion`] when the reported magic is not one
    /// of the three known values; no layout is guessed for an ABI this
    /// library predates.
    pub fn with_source(source: S) -> Result<Self> {
        let mut header = CapUserHeader::default();
        source
            .capget(&mut header, None)
            .map_err(|source| Error::Probe { source })?;
        let version = AbiVersion::from_magic(header.version)
            .ok_or(Error::UnsupportedVersion { raw: header.version })?;
        debug!(%version, magic = header.version, "probed capability ABI version");
        Ok(Self {
            source,
            version,
            snapshot: Snapshot::empty(version),
        })
    }

    /// ABI version the kernel reported at construction.
    pub fn version(&self) -> AbiVersion {
        self.version
    }

    /// Whether capability `capability` is in `set` for process `pid`.
    ///
    /// Pid 0 selects the calling thread; any other pid works subject to the
    /// caller's permission to inspect that process. On error the instance
    /// stays valid for further queries.
    pub fn is_set(&mut self, pid: i32, capability: u32, set: CapSet) -> Result<bool> {
        if !self.version.supports(set) {
            return Err(Error::InvalidSetForVersion {
                set,
                version: self.version,
            });
        }
        let max = self.version.max_capability();
        if capability > max {
            return Err(Error::CapabilityOutOfRange { capability, max });
        }
        self.refresh(pid)?;
        let hit = self.snapshot.is_set(capability, set);
        trace!(pid, capability, %set, hit, "capability query");
        Ok(hit)
    }

    /// Whether capability `capability` is in `set` for the calling process.
    ///
    /// Same as [`CapQuery::is_set`] with the pid fixed to
    /// `std::process::id()`.
    pub fn is_set_for_self(&mut self, capability: u32, set: CapSet) -> Result<bool> {
        self.is_set(std::process::id() as i32, capability, set)
    }

    /// Re-issue the kernel call for `pid`, overwriting the snapshot.
    fn refresh(&mut self, pid: i32) -> Result<()> {
        let header = CapUserHeader {
            version: self.version.magic(),
            pid,
        };
        match self.version {
            AbiVersion::V1 => {
                let mut snap = SnapshotV1 {
                    header,
                    data: CapUserData::default(),
                };
                self.source
                    .capget(&mut snap.header, Some(std::slice::from_mut(&mut snap.data)))
                    .map_err(|source| Error::from_query_failure(pid, source))?;
                self.snapshot = Snapshot::V1(snap);
            }
            AbiVersion::V2 | AbiVersion::V3 => {
                let mut snap = SnapshotV3 {
                    header,
                    ..SnapshotV3::default()
                };
                self.source
                    .capget(&mut snap.header, Some(&mut snap.data))
                    .map_err(|source| Error::from_query_failure(pid, source))?;
                let extended = self
                    .source
                    .extended_sets(pid)
                    .map_err(|source| Error::from_query_failure(pid, source))?;
                snap.bounding = extended.bounding;
                snap.ambient = extended.ambient;
                self.snapshot = Snapshot::V3(snap);
            }
        }
        Ok(())
    }
}
