//! Builder validation and default derivation.

use fastNumkern::prelude::*;

#[test]
fn test_build_with_defaults_succeeds() {
    let kernels = Kernels::new().unwrap();
    assert!(kernels.workers() >= 1);
}

#[test]
fn test_explicit_workers_are_recorded() {
    let kernels = Kernels::builder().workers(3).build().unwrap();
    assert_eq!(kernels.workers(), 3);
}

#[test]
fn test_zero_threshold_rejected() {
    let err = Kernels::builder().threshold(0).build().unwrap_err();
    assert_eq!(err, KernelError::InvalidThreshold(0));
}

#[test]
fn test_zero_workers_rejected() {
    let err = Kernels::builder().workers(0).build().unwrap_err();
    assert_eq!(err, KernelError::InvalidWorkerCount(0));
}

#[test]
fn test_excessive_depth_budget_rejected() {
    let err = Kernels::builder().depth_budget(65).build().unwrap_err();
    assert_eq!(err, KernelError::InvalidDepthBudget(65));
}

#[test]
fn test_explicit_depth_budget_is_recorded() {
    let kernels = Kernels::builder().depth_budget(5).build().unwrap();
    assert_eq!(kernels.depth_budget(), 5);
}

#[test]
fn test_depth_budget_defaults_to_log2_of_workers() {
    assert_eq!(default_depth_budget(1), 0);
    assert_eq!(default_depth_budget(2), 1);
    assert_eq!(default_depth_budget(3), 2);
    assert_eq!(default_depth_budget(4), 2);
    assert_eq!(default_depth_budget(8), 3);
    assert_eq!(default_depth_budget(9), 4);
}

#[test]
fn test_default_depth_budget_tracks_worker_count() {
    for workers in [1, 2, 4, 16] {
        let kernels = Kernels::builder().workers(workers).build().unwrap();
        assert_eq!(kernels.depth_budget(), default_depth_budget(workers));
    }
}
