//! End-to-end scan controller tests over mock hardware.
//!
//! These exercise the full state machine lifecycle: guarded start and reset,
//! failure containment mid-scan, and recovery with failing actuator resets.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use rust_scan::config::ScanSettings;
use rust_scan::hardware::MockAxis;
use rust_scan::scan::{ScanController, ScanState};

fn settings(num_points: u32) -> ScanSettings {
    ScanSettings {
        motor_x_id: "mock_x".to_string(),
        motor_y_id: "mock_y".to_string(),
        num_points,
        x_min: 0.0,
        x_max: 10.0,
        y_min: -5.0,
        y_max: 5.0,
    }
}

fn controller(
    num_points: u32,
    x: Arc<MockAxis>,
    y: Arc<MockAxis>,
    seed: u64,
) -> ScanController {
    ScanController::with_rng(
        settings(num_points),
        x,
        y,
        Box::new(StdRng::seed_from_u64(seed)),
    )
}

#[tokio::test]
async fn full_scan_visits_every_waypoint_and_returns_to_ready() {
    let x = Arc::new(MockAxis::new("x"));
    let y = Arc::new(MockAxis::new("y"));
    let mut controller = controller(5, x.clone(), y.clone(), 7);

    controller.start().await;

    assert_eq!(controller.state(), ScanState::Ready);
    assert_eq!(controller.status(), "Scan complete");
    assert_eq!(x.move_count().await, 5);
    assert_eq!(y.move_count().await, 5);

    // Every completed move landed inside the configured rectangle.
    for pos in x.completed_moves().await {
        assert!((0.0..=10.0).contains(&pos));
    }
    for pos in y.completed_moves().await {
        assert!((-5.0..=5.0).contains(&pos));
    }

    let summary = controller.last_summary().expect("summary after success");
    assert_eq!(summary.num_points, 5);
    assert!(summary.path_length > 0.0);
}

#[tokio::test]
async fn move_failure_halts_scan_and_enters_error() {
    let x = Arc::new(MockAxis::new("x"));
    let y = Arc::new(MockAxis::new("y"));
    // Third X move fails: waypoints 0 and 1 complete, waypoint 2 aborts.
    x.fail_on_move(3).await;
    let mut controller = controller(5, x.clone(), y.clone(), 7);

    controller.start().await;

    assert_eq!(controller.state(), ScanState::Error);
    assert!(controller.status().starts_with("Error during scan"));
    // No moves were issued past the failure point.
    assert_eq!(x.move_count().await, 3);
    assert_eq!(y.move_count().await, 2);
    assert!(controller.last_summary().is_none());
}

#[tokio::test]
async fn start_rejected_while_in_error() {
    let x = Arc::new(MockAxis::new("x"));
    let y = Arc::new(MockAxis::new("y"));
    x.fail_on_move(1).await;
    let mut controller = controller(3, x.clone(), y.clone(), 1);

    controller.start().await;
    assert_eq!(controller.state(), ScanState::Error);
    let moves_after_failure = x.move_count().await;

    // A second start must be a no-op: no state change, no new points, no
    // motion.
    controller.start().await;
    assert_eq!(controller.state(), ScanState::Error);
    assert_eq!(x.move_count().await, moves_after_failure);
    assert_eq!(y.move_count().await, 0);
}

#[tokio::test]
async fn reset_recovers_from_error_and_resets_both_axes() {
    let x = Arc::new(MockAxis::new("x"));
    let y = Arc::new(MockAxis::new("y"));
    y.fail_on_move(1).await;
    let mut controller = controller(2, x.clone(), y.clone(), 3);

    controller.start().await;
    assert_eq!(controller.state(), ScanState::Error);

    controller.reset().await;
    assert_eq!(controller.state(), ScanState::Ready);
    assert_eq!(controller.status(), "");
    assert_eq!(x.reset_count().await, 1);
    assert_eq!(y.reset_count().await, 1);

    // The controller accepts a fresh scan after recovery.
    controller.start().await;
    assert_eq!(controller.state(), ScanState::Ready);
    assert_eq!(controller.status(), "Scan complete");
}

#[tokio::test]
async fn reset_swallows_actuator_reset_failures() {
    let x = Arc::new(MockAxis::new("x"));
    let y = Arc::new(MockAxis::new("y"));
    x.fail_on_move(1).await;
    x.fail_resets().await;
    y.fail_resets().await;
    let mut controller = controller(2, x.clone(), y.clone(), 5);

    controller.start().await;
    assert_eq!(controller.state(), ScanState::Error);

    // Both axis resets fail, but recovery still lands in Ready.
    controller.reset().await;
    assert_eq!(controller.state(), ScanState::Ready);
    assert_eq!(x.reset_count().await, 1);
    assert_eq!(y.reset_count().await, 1);
}

#[tokio::test]
async fn reset_rejected_when_not_in_error() {
    let x = Arc::new(MockAxis::new("x"));
    let y = Arc::new(MockAxis::new("y"));
    let mut controller = controller(2, x.clone(), y.clone(), 9);

    controller.reset().await;
    assert_eq!(controller.state(), ScanState::Ready);
    assert_eq!(x.reset_count().await, 0);
    assert_eq!(y.reset_count().await, 0);

    // Still rejected after a successful scan (state is Ready again).
    controller.start().await;
    controller.reset().await;
    assert_eq!(x.reset_count().await, 0);
}

#[tokio::test]
async fn identical_seeds_produce_identical_motion() {
    let x1 = Arc::new(MockAxis::new("x"));
    let y1 = Arc::new(MockAxis::new("y"));
    let mut first = controller(4, x1.clone(), y1.clone(), 42);
    first.start().await;

    let x2 = Arc::new(MockAxis::new("x"));
    let y2 = Arc::new(MockAxis::new("y"));
    let mut second = controller(4, x2.clone(), y2.clone(), 42);
    second.start().await;

    assert_eq!(x1.completed_moves().await, x2.completed_moves().await);
    assert_eq!(y1.completed_moves().await, y2.completed_moves().await);
}
