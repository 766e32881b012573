//! Background tasks for the voxdesk server.
//!
//! Includes:
//! - Sweeping sessions the voice framework abandoned without ending them.

use crate::AppState;
use std::sync::Arc;
use tokio::time::{sleep, Duration};

/// Starts the idle session sweep.
///
/// Runs indefinitely, removing sessions that have not handled a tool call
/// within `idle_timeout_seconds`.
pub async fn start_session_sweep_task(state: Arc<AppState>, idle_timeout_seconds: u64) {
    if idle_timeout_seconds == 0 {
        tracing::warn!("session sweep disabled (idle_timeout_secs=0)");
        return;
    }

    // Check every 60 seconds or timeout/2, whichever is smaller (but min 1s)
    let interval_seconds = (idle_timeout_seconds / 2).clamp(1, 60);
    let interval = Duration::from_secs(interval_seconds);
    let max_idle = Duration::from_secs(idle_timeout_seconds);

    tracing::info!(
        idle_timeout_seconds,
        interval_seconds,
        "starting idle session sweep"
    );

    loop {
        sleep(interval).await;

        let evicted = state.evict_idle_sessions(max_idle);
        if evicted > 0 {
            tracing::info!(count = evicted, "evicted idle sessions");
        }
    }
}
