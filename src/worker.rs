//! Background thread that clicks while the shared `running` flag is set.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, info, trace, warn};

use crate::error::{ClickerError, Result};
use crate::injector::Clicker;
use crate::keys::MouseButton;
use crate::state::ClickerState;

/// How long the worker sleeps between checks while clicking is off.
pub const IDLE_POLL: Duration = Duration::from_millis(20);

/// Handle to the running click worker thread.
pub struct ClickWorker {
    handle: JoinHandle<()>,
    done_rx: Receiver<()>,
}

impl ClickWorker {
    /// Start the worker thread.
    ///
    /// The clicker is built on the worker thread itself, so it never has to
    /// cross threads. This call blocks until construction has either succeeded
    /// or failed, and returns the construction error in the latter case.
    pub fn spawn<C, F>(
        state: Arc<ClickerState>,
        button: MouseButton,
        interval: Duration,
        make_clicker: F,
    ) -> Result<Self>
    where
        C: Clicker + 'static,
        F: FnOnce() -> Result<C> + Send + 'static,
    {
        let (ready_tx, ready_rx) = mpsc::sync_channel::<Result<()>>(1);
        let (done_tx, done_rx) = mpsc::channel();

        let handle = thread::Builder::new()
            .name("click-worker".to_string())
            .spawn(move || {
                let mut clicker = match make_clicker() {
                    Ok(clicker) => {
                        let _ = ready_tx.send(Ok(()));
                        clicker
                    }
                    Err(e) => {
                        let _ = ready_tx.send(Err(e));
                        return;
                    }
                };

                info!(?button, ?interval, "click worker started");
                run_loop(&mut clicker, &state, button, interval);
                info!("click worker stopped");

                let _ = done_tx.send(());
            })?;

        match ready_rx.recv() {
            Ok(Ok(())) => Ok(Self { handle, done_rx }),
            Ok(Err(e)) => {
                let _ = handle.join();
                Err(e)
            }
            Err(_) => {
                let _ = handle.join();
                Err(ClickerError::worker_start(
                    "worker thread exited before reporting ready",
                ))
            }
        }
    }

    /// Wait up to `timeout` for the worker to acknowledge that it saw the exit
    /// flag, then join it.
    ///
    /// Returns `false` if no acknowledgment arrived in time; the thread is left
    /// detached in that case.
    pub fn shutdown(self, timeout: Duration) -> bool {
        match self.done_rx.recv_timeout(timeout) {
            Ok(()) => {
                if self.handle.join().is_err() {
                    warn!("click worker panicked during shutdown");
                }
                debug!("click worker joined");
                true
            }
            Err(RecvTimeoutError::Timeout) => {
                warn!(?timeout, "click worker did not stop in time");
                false
            }
            Err(RecvTimeoutError::Disconnected) => {
                warn!("click worker exited without acknowledging shutdown");
                let _ = self.handle.join();
                false
            }
        }
    }
}

/// Click loop body. Returns once `exiting` is observed.
pub fn run_loop<C: Clicker>(
    clicker: &mut C,
    state: &ClickerState,
    button: MouseButton,
    interval: Duration,
) {
    while !state.is_exiting() {
        if state.is_running() {
            // Re-checked so a quit between the two loads never produces a click.
            if state.is_exiting() {
                break;
            }
            if let Err(e) = clicker.click(button) {
                trace!(error = %e, "click dropped");
            }
            sleep_unless_exiting(state, interval);
        } else {
            thread::sleep(IDLE_POLL);
        }
    }
}

/// Sleep for `duration` in [`IDLE_POLL`] slices, returning early once
/// `exiting` is set.
fn sleep_unless_exiting(state: &ClickerState, duration: Duration) {
    let deadline = Instant::now().checked_add(duration);

    while !state.is_exiting() {
        let remaining = match deadline {
            Some(deadline) => deadline.saturating_duration_since(Instant::now()),
            None => IDLE_POLL,
        };
        if remaining.is_zero() {
            break;
        }
        thread::sleep(remaining.min(IDLE_POLL));
    }
}
