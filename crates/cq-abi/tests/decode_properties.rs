//! Property-based tests for capability bit decoding.

use cq_abi::{CapSet, CapUserData, SnapshotV1, SnapshotV3};
use proptest::prelude::*;

const ALL_SETS: [CapSet; 5] = [
    CapSet::Effective,
    CapSet::Permitted,
    CapSet::Inheritable,
    CapSet::Bounding,
    CapSet::Ambient,
];

/// V3 snapshot with the same word pair backing every set.
fn v3_with_words(lo: u32, hi: u32) -> SnapshotV3 {
    SnapshotV3 {
        data: [
            CapUserData {
                effective: lo,
                permitted: lo,
                inheritable: lo,
            },
            CapUserData {
                effective: hi,
                permitted: hi,
                inheritable: hi,
            },
        ],
        bounding: [lo, hi],
        ambient: [lo, hi],
        ..SnapshotV3::default()
    }
}

proptest! {
    /// The two-word decode agrees with a plain u64 bit test for arbitrary
    /// word contents across the full index range.
    #[test]
    fn v3_matches_u64_reference(lo: u32, hi: u32, capability in 0u32..64) {
        let snap = v3_with_words(lo, hi);
        let mask = (hi as u64) << 32 | lo as u64;
        let expected = mask >> capability & 1 != 0;
        for set in ALL_SETS {
            prop_assert_eq!(snap.is_set(capability, set), expected);
        }
    }

    /// A snapshot carrying exactly one bit answers true for that index only.
    #[test]
    fn v3_single_bit_is_exclusive(capability in 0u32..64) {
        let mask = 1u64 << capability;
        let snap = v3_with_words(mask as u32, (mask >> 32) as u32);
        for set in ALL_SETS {
            for probe in 0..64 {
                prop_assert_eq!(snap.is_set(probe, set), probe == capability);
            }
        }
    }

    /// The single-word decode agrees with a plain u32 bit test.
    #[test]
    fn v1_matches_u32_reference(word: u32, capability in 0u32..32) {
        let snap = SnapshotV1 {
            data: CapUserData {
                effective: word,
                permitted: word,
                inheritable: word,
            },
            ..SnapshotV1::default()
        };
        let expected = word >> capability & 1 != 0;
        prop_assert_eq!(snap.is_set(capability, CapSet::Effective), expected);
        prop_assert_eq!(snap.is_set(capability, CapSet::Permitted), expected);
        prop_assert_eq!(snap.is_set(capability, CapSet::Inheritable), expected);
    }

    /// Indices outside a layout's range test false no matter the contents.
    #[test]
    fn out_of_range_indices_test_false(word: u32, capability in 64u32..256) {
        let snap = v3_with_words(word, word);
        let v1 = SnapshotV1 {
            data: CapUserData {
                effective: word,
                permitted: word,
                inheritable: word,
            },
            ..SnapshotV1::default()
        };
        for set in ALL_SETS {
            prop_assert!(!snap.is_set(capability, set));
            prop_assert!(!v1.is_set(capability, set));
        }
    }
}
