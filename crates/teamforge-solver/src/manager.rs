//! Off-thread execution for async callers.
//!
//! Enumeration is CPU-bound and can run for seconds on large rosters. The
//! [`BalancerManager`] runs each solve on a dedicated thread and hands the
//! result back over a `tokio` oneshot channel, so request handlers can
//! `.await` it without stalling their runtime.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use teamforge_config::BalancerConfig;
use teamforge_core::{Result, Roster, TeamForgeError};
use tokio::sync::oneshot;
use tracing::warn;

use crate::balancer::Balancer;
use crate::result::ResultSet;

/// Spawns balancer solves on worker threads.
///
/// # Examples
///
/// ```
/// use teamforge_config::BalancerConfig;
/// use teamforge_core::Roster;
/// use teamforge_solver::BalancerManager;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let manager = BalancerManager::new(BalancerConfig::default());
/// let roster = Roster::from_scores((1..=4u32).map(|v| vec![v; 9])).unwrap();
///
/// let result = manager.solve(roster).await.unwrap();
/// assert_eq!(result.total_difference, 0);
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct BalancerManager {
    config: Arc<BalancerConfig>,
}

impl BalancerManager {
    pub fn new(config: BalancerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &BalancerConfig {
        &self.config
    }

    /// Starts a solve on a new thread.
    ///
    /// # Errors
    ///
    /// [`TeamForgeError::Config`] if the thread cannot be spawned.
    pub fn spawn(&self, roster: Roster) -> Result<SolveHandle> {
        let (sender, receiver) = oneshot::channel();
        let terminate_flag = Arc::new(AtomicBool::new(false));
        let balancer =
            Balancer::new((*self.config).clone()).with_terminate_flag(Arc::clone(&terminate_flag));

        thread::Builder::new()
            .name("teamforge-balancer".into())
            .spawn(move || {
                let result = balancer.solve(&roster);
                if sender.send(result).is_err() {
                    warn!(event = "result_dropped", "Solve finished after its handle was dropped");
                }
            })
            .map_err(|e| TeamForgeError::Config(format!("failed to spawn balancer thread: {e}")))?;

        Ok(SolveHandle {
            receiver,
            terminate_flag,
        })
    }

    /// Solves on a worker thread and awaits the result.
    pub async fn solve(&self, roster: Roster) -> Result<ResultSet> {
        self.spawn(roster)?.result().await
    }
}

/// A running solve.
#[derive(Debug)]
pub struct SolveHandle {
    receiver: oneshot::Receiver<Result<ResultSet>>,
    terminate_flag: Arc<AtomicBool>,
}

impl SolveHandle {
    /// Asks the solve to stop and return its best-so-far results.
    pub fn terminate_early(&self) {
        self.terminate_flag.store(true, Ordering::SeqCst);
    }

    /// Waits for the solve to finish.
    ///
    /// # Errors
    ///
    /// The solve's own error, or [`TeamForgeError::Cancelled`] if the
    /// worker died without reporting.
    pub async fn result(self) -> Result<ResultSet> {
        self.receiver
            .await
            .map_err(|_| TeamForgeError::Cancelled)?
    }

    /// Blocking variant of [`result`](Self::result) for non-async callers.
    pub fn blocking_result(self) -> Result<ResultSet> {
        self.receiver
            .blocking_recv()
            .map_err(|_| TeamForgeError::Cancelled)?
    }
}
