//! Raw kernel boundary: capget(2) and the procfs capability lines.
//!
//! The query facade talks to the kernel through the [`CapSource`] trait so
//! tests can substitute simulated kernels for the version-probe and failure
//! paths. [`KernelSource`] is the live implementation.

use std::fs;
use std::io;

use cq_abi::{CapUserData, CapUserHeader};
use tracing::trace;

/// Bounding and ambient word pairs for one process, low word first.
///
/// capget(2) carries only the effective/permitted/inheritable records; the
/// kernel exposes the bounding and ambient sets through
/// `/proc/<pid>/status`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtendedSets {
    pub bounding: [u32; 2],
    pub ambient: [u32; 2],
}

/// Source of raw capability state for the query facade.
pub trait CapSource {
    /// Issue the capability query call. With `data` `None` the kernel only
    /// fills the header's version field (the version probe); otherwise the
    /// records are filled for the pid named in the header.
    fn capget(
        &self,
        header: &mut CapUserHeader,
        data: Option<&mut [CapUserData]>,
    ) -> io::Result<()>;

    /// Read the bounding and ambient word pairs for `pid` (0 selects the
    /// calling process).
    fn extended_sets(&self, pid: i32) -> io::Result<ExtendedSets>;
}

/// Live kernel implementation of [`CapSource`].
#[derive(Debug, Clone, Copy, Default)]
pub struct KernelSource;

impl CapSource for KernelSource {
    #[cfg(target_os = "linux")]
    fn capget(
        &self,
        header: &mut CapUserHeader,
        data: Option<&mut [CapUserData]>,
    ) -> io::Result<()> {
        let datap = match data {
            Some(records) => records.as_mut_ptr(),
            None => std::ptr::null_mut(),
        };
        let rc = unsafe { libc::syscall(libc::SYS_capget, header as *mut CapUserHeader, datap) };
        if rc == 0 {
            return Ok(());
        }
        Err(io::Error::last_os_error())
    }

    #[cfg(not(target_os = "linux"))]
    fn capget(
        &self,
        _header: &mut CapUserHeader,
        _data: Option<&mut [CapUserData]>,
    ) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "capget is only available on Linux",
        ))
    }

    fn extended_sets(&self, pid: i32) -> io::Result<ExtendedSets> {
        let path = if pid == 0 {
            "/proc/self/status".to_string()
        } else {
            format!("/proc/{pid}/status")
        };
        let status = fs::read_to_string(&path)?;
        let bounding = parse_cap_line(&status, "CapBnd:").ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("no CapBnd line in {path}"),
            )
        })?;
        // CapAmb appeared in Linux 4.3; a missing line means no ambient set.
        let ambient = parse_cap_line(&status, "CapAmb:").unwrap_or(0);
        trace!(pid, bounding, ambient, "read extended capability sets");
        Ok(ExtendedSets {
            bounding: split_words(bounding),
            ambient: split_words(ambient),
        })
    }
}

/// Parse one `CapXxx:\t<hex>` line out of a /proc/<pid>/status blob.
fn parse_cap_line(status: &str, prefix: &str) -> Option<u64> {
    status
        .lines()
        .find_map(|line| line.strip_prefix(prefix))
        .and_then(|hex| u64::from_str_radix(hex.trim(), 16).ok())
}

/// Split a 64-bit capability mask into the ABI's low/high word pair.
const fn split_words(mask: u64) -> [u32; 2] {
    [mask as u32, (mask >> 32) as u32]
}
