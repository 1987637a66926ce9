//! Kernel capability structs and versioned snapshot decoding.
//!
//! `CapUserHeader` and `CapUserData` mirror the kernel's
//! `__user_cap_header_struct` and `__user_cap_data_struct` byte for byte, so
//! they can be handed to capget(2) directly. `Snapshot` is the most recent
//! decode for one (version, pid) pair, tagged by the ABI version that
//! produced it, and answers bit-test queries against whichever layout is
//! active.

use crate::set::{AbiVersion, CapSet};

/// Header exchanged with the capability query call: ABI version magic plus
/// target pid. Pid 0 selects the calling thread.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CapUserHeader {
    pub version: u32,
    pub pid: i32,
}

/// One 32-bit record of the capability data layout. Version 1 uses a single
/// record; versions 2 and 3 use two consecutive records, low word first.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CapUserData {
    pub effective: u32,
    pub permitted: u32,
    pub inheritable: u32,
}

/// Version 1 snapshot: one data record covering capability indices 0-31.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotV1 {
    pub header: CapUserHeader,
    pub data: CapUserData,
}

impl SnapshotV1 {
    /// Test one capability bit.
    ///
    /// Only the effective, permitted, and inheritable sets exist in this
    /// layout; the bounding and ambient kinds, and indices above 31, test
    /// false. The query layer rejects both cases with an error before
    /// delegating here.
    pub fn is_set(&self, capability: u32, set: CapSet) -> bool {
        if capability > 31 {
            return false;
        }
        let word = match set {
            CapSet::Effective => self.data.effective,
            CapSet::Permitted => self.data.permitted,
            CapSet::Inheritable => self.data.inheritable,
            CapSet::Bounding | CapSet::Ambient => return false,
        };
        word >> capability & 1 != 0
    }
}

/// Version 2/3 snapshot: two data records covering indices 0-63, plus the
/// bounding and ambient word pairs held alongside them.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotV3 {
    pub header: CapUserHeader,
    pub data: [CapUserData; 2],
    pub bounding: [u32; 2],
    pub ambient: [u32; 2],
}

impl SnapshotV3 {
    /// The two words backing `set`, low word first.
    fn words(&self, set: CapSet) -> [u32; 2] {
        match set {
            CapSet::Effective => [self.data[0].effective, self.data[1].effective],
            CapSet::Permitted => [self.data[0].permitted, self.data[1].permitted],
            CapSet::Inheritable => [self.data[0].inheritable, self.data[1].inheritable],
            CapSet::Bounding => self.bounding,
            CapSet::Ambient => self.ambient,
        }
    }

    /// Test one capability bit. Index 32 maps to bit 0 of the second word,
    /// index 63 to bit 31 of the second word; indices above 63 test false.
    pub fn is_set(&self, capability: u32, set: CapSet) -> bool {
        let word = (capability / 32) as usize;
        let bit = capability % 32;
        word < 2 && self.words(set)[word] >> bit & 1 != 0
    }
}

/// Most recent capability decode, tagged by the ABI version that produced it.
#[derive(Debug, Clone, Copy)]
pub enum Snapshot {
    V1(SnapshotV1),
    V3(SnapshotV3),
}

impl Snapshot {
    /// All-clear snapshot in the layout matching `version`. Versions 2 and 3
    /// share the two-word layout.
    pub fn empty(version: AbiVersion) -> Self {
        match version {
            AbiVersion::V1 => Snapshot::V1(SnapshotV1::default()),
            AbiVersion::V2 | AbiVersion::V3 => Snapshot::V3(SnapshotV3::default()),
        }
    }

    /// Test one capability bit in the active layout.
    pub fn is_set(&self, capability: u32, set: CapSet) -> bool {
        match self {
            Snapshot::V1(snap) => snap.is_set(capability, set),
            Snapshot::V3(snap) => snap.is_set(capability, set),
        }
    }
}
