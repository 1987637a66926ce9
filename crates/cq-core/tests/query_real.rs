//! Live-kernel capability query tests.
//!
//! These exercise the real capget(2) and procfs paths and are meaningful
//! only on Linux.

#![cfg(target_os = "linux")]

use cq_core::{AbiVersion, CapQuery, CapSet, Error};

#[test]
fn probes_a_known_abi_version() {
    let caps = CapQuery::new().expect("kernel should speak a known capability ABI");
    // Every kernel since 2.6.26 reports version 3.
    println!("probed capability ABI version {}", caps.version());
}

#[test]
fn queries_self_effective() {
    let mut caps = CapQuery::new().expect("probe");
    // CAP_CHOWN = 0. Whether it is set depends on how the tests run; the
    // query itself must succeed for our own pid.
    caps.is_set_for_self(0, CapSet::Effective).expect("self query");
}

#[test]
fn queries_self_across_all_sets() {
    let mut caps = CapQuery::new().expect("probe");
    if caps.version() == AbiVersion::V1 {
        println!("skipping: version 1 kernel has no bounding/ambient sets");
        return;
    }
    for set in [
        CapSet::Effective,
        CapSet::Permitted,
        CapSet::Inheritable,
        CapSet::Bounding,
        CapSet::Ambient,
    ] {
        caps.is_set_for_self(0, set).expect("self query");
    }
}

#[test]
fn explicit_pid_matches_self_wrapper() {
    let mut caps = CapQuery::new().expect("probe");
    let pid = std::process::id() as i32;
    for capability in [0, 10, 21] {
        let by_pid = caps.is_set(pid, capability, CapSet::Effective).expect("by pid");
        let by_self = caps
            .is_set_for_self(capability, CapSet::Effective)
            .expect("by self");
        assert_eq!(by_pid, by_self);
    }
}

#[test]
fn pid_zero_selects_caller() {
    let mut caps = CapQuery::new().expect("probe");
    let by_zero = caps.is_set(0, 0, CapSet::Permitted).expect("pid 0");
    let by_self = caps.is_set_for_self(0, CapSet::Permitted).expect("self");
    assert_eq!(by_zero, by_self);
}

#[test]
fn nonexistent_process_is_an_error() {
    let mut caps = CapQuery::new().expect("probe");
    // Far above any default pid_max.
    let err = caps.is_set(999_999_999, 0, CapSet::Effective).unwrap_err();
    assert!(matches!(err, Error::ProcessNotFound { .. }), "got {err:?}");
}

#[test]
fn failed_query_leaves_instance_valid() {
    let mut caps = CapQuery::new().expect("probe");
    let _ = caps.is_set(999_999_999, 0, CapSet::Effective).unwrap_err();
    caps.is_set_for_self(0, CapSet::Effective)
        .expect("instance should survive a failed query");
}

#[test]
fn out_of_range_index_is_rejected_before_the_syscall() {
    let mut caps = CapQuery::new().expect("probe");
    let max = caps.version().max_capability();
    let err = caps.is_set_for_self(max + 1, CapSet::Effective).unwrap_err();
    assert!(
        matches!(err, Error::CapabilityOutOfRange { .. }),
        "got {err:?}"
    );
}
