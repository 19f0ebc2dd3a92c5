//! Mock hardware implementations.
//!
//! Provides a simulated motion axis for testing without physical hardware.
//! All mock operations are async-safe (tokio::time::sleep, not
//! std::thread::sleep).
//!
//! # Test hooks
//!
//! - [`MockAxis::fail_on_move`] - make the n-th move invocation fail
//! - [`MockAxis::fail_resets`] - make every reset invocation fail
//! - invocation counters and a record of completed target positions

use anyhow::{bail, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::{sleep, Duration};

use crate::hardware::capabilities::Axis;

/// Mock motion axis with tracked position and injectable failures.
///
/// # Example
///
/// ```rust,ignore
/// let axis = MockAxis::new("x");
/// axis.set_target(10.0).await?;
/// axis.execute_move().await?;
/// assert_eq!(axis.position().await, 10.0);
/// ```
pub struct MockAxis {
    id: String,
    position: RwLock<f64>,
    target: RwLock<f64>,
    move_delay: Duration,
    /// 1-based index of the move invocation that should fail, if any.
    fail_on_move: RwLock<Option<u64>>,
    fail_resets: RwLock<bool>,
    move_count: RwLock<u64>,
    reset_count: RwLock<u64>,
    /// Target positions of every successfully completed move, in order.
    completed_moves: RwLock<Vec<f64>>,
}

impl MockAxis {
    /// Create a new mock axis at position 0.0 with no artificial move delay.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            position: RwLock::new(0.0),
            target: RwLock::new(0.0),
            move_delay: Duration::ZERO,
            fail_on_move: RwLock::new(None),
            fail_resets: RwLock::new(false),
            move_count: RwLock::new(0),
            reset_count: RwLock::new(0),
            completed_moves: RwLock::new(Vec::new()),
        }
    }

    /// Create a mock axis that sleeps for `delay` during every move, to
    /// simulate settling time.
    pub fn with_move_delay(id: impl Into<String>, delay: Duration) -> Self {
        Self {
            move_delay: delay,
            ..Self::new(id)
        }
    }

    /// Make the n-th `execute_move` invocation (1-based) return an error.
    /// Earlier and later moves succeed.
    pub async fn fail_on_move(&self, nth: u64) {
        *self.fail_on_move.write().await = Some(nth);
    }

    /// Make every `reset` invocation return an error.
    pub async fn fail_resets(&self) {
        *self.fail_resets.write().await = true;
    }

    /// Current physical position.
    pub async fn position(&self) -> f64 {
        *self.position.read().await
    }

    /// Last recorded target position.
    pub async fn target(&self) -> f64 {
        *self.target.read().await
    }

    /// Total number of `execute_move` invocations, including failed ones.
    pub async fn move_count(&self) -> u64 {
        *self.move_count.read().await
    }

    /// Total number of `reset` invocations, including failed ones.
    pub async fn reset_count(&self) -> u64 {
        *self.reset_count.read().await
    }

    /// Target positions of every completed move, in completion order.
    pub async fn completed_moves(&self) -> Vec<f64> {
        self.completed_moves.read().await.clone()
    }
}

#[async_trait]
impl Axis for MockAxis {
    async fn set_target(&self, position: f64) -> Result<()> {
        *self.target.write().await = position;
        log::debug!("MockAxis '{}': target set to {:.4}", self.id, position);
        Ok(())
    }

    async fn execute_move(&self) -> Result<()> {
        let nth = {
            let mut count = self.move_count.write().await;
            *count += 1;
            *count
        };

        if *self.fail_on_move.read().await == Some(nth) {
            bail!("MockAxis '{}': injected failure on move #{}", self.id, nth);
        }

        if !self.move_delay.is_zero() {
            sleep(self.move_delay).await;
        }

        let target = *self.target.read().await;
        *self.position.write().await = target;
        self.completed_moves.write().await.push(target);
        log::debug!("MockAxis '{}': reached {:.4}", self.id, target);
        Ok(())
    }

    async fn reset(&self) -> Result<()> {
        *self.reset_count.write().await += 1;
        if *self.fail_resets.read().await {
            bail!("MockAxis '{}': injected reset failure", self.id);
        }
        log::debug!("MockAxis '{}': reset", self.id);
        Ok(())
    }
}
