//! Capability set kinds and ABI versions.

use serde::{Deserialize, Serialize};

/// One of the five logical capability sets the kernel tracks per thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapSet {
    /// Capabilities the kernel uses for permission checks on this thread.
    Effective,
    /// Limiting superset for the effective capabilities the thread may assume.
    Permitted,
    /// Capabilities preserved across an execve(2); added to the permitted set
    /// when executing a program whose file inheritable set carries the same
    /// bits.
    Inheritable,
    /// Upper bound on the capabilities that can be gained during execve(2).
    Bounding,
    /// Capabilities preserved across an execve(2) of an unprivileged program.
    /// The kernel keeps a capability ambient only while it is also both
    /// permitted and inheritable.
    Ambient,
}

impl std::fmt::Display for CapSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CapSet::Effective => write!(f, "effective"),
            CapSet::Permitted => write!(f, "permitted"),
            CapSet::Inheritable => write!(f, "inheritable"),
            CapSet::Bounding => write!(f, "bounding"),
            CapSet::Ambient => write!(f, "ambient"),
        }
    }
}

/// Kernel capability ABI version.
///
/// Version 1 predates Linux 2.6.25 and carries a single 32-bit word per set.
/// Version 2 (Linux 2.6.25) widened the sets to 64 bits across two words;
/// version 3 (Linux 2.6.26) fixed the header pid type and shares version 2's
/// data layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbiVersion {
    V1,
    V2,
    V3,
}

impl AbiVersion {
    /// `_LINUX_CAPABILITY_VERSION_1` header magic.
    pub const MAGIC_V1: u32 = 0x1998_0330;
    /// `_LINUX_CAPABILITY_VERSION_2` header magic.
    pub const MAGIC_V2: u32 = 0x2007_1026;
    /// `_LINUX_CAPABILITY_VERSION_3` header magic.
    pub const MAGIC_V3: u32 = 0x2008_0522;

    /// Map a header magic reported by the kernel onto a known version.
    pub fn from_magic(raw: u32) -> Option<Self> {
        match raw {
            Self::MAGIC_V1 => Some(AbiVersion::V1),
            Self::MAGIC_V2 => Some(AbiVersion::V2),
            Self::MAGIC_V3 => Some(AbiVersion::V3),
            _ => None,
        }
    }

    /// Header magic for this version.
    pub const fn magic(self) -> u32 {
        match self {
            AbiVersion::V1 => Self::MAGIC_V1,
            AbiVersion::V2 => Self::MAGIC_V2,
            AbiVersion::V3 => Self::MAGIC_V3,
        }
    }

    /// Whether `set` exists in this version's layout. The bounding and
    /// ambient sets are not part of the version 1 ABI.
    pub const fn supports(self, set: CapSet) -> bool {
        !matches!(
            (self, set),
            (AbiVersion::V1, CapSet::Bounding) | (AbiVersion::V1, CapSet::Ambient)
        )
    }

    /// Highest capability index representable in this version's layout.
    pub const fn max_capability(self) -> u32 {
        match self {
            AbiVersion::V1 => 31,
            AbiVersion::V2 | AbiVersion::V3 => 63,
        }
    }
}

impl std::fmt::Display for AbiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AbiVersion::V1 => write!(f, "1"),
            AbiVersion::V2 => write!(f, "2"),
            AbiVersion::V3 => write!(f, "3"),
        }
    }
}
