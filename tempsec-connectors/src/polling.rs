//! Tokio polling driver
//!
//! Runs [`Monitor::poll_once`] on a fixed interval. Each poll runs on the
//! blocking pool because sources such as the HTTP one block. Outcomes,
//! errors included, go to the host through an mpsc channel.
//!
//! The host starts the driver and owns the handle:
//!
//! ```no_run
//! # async fn run() -> Result<(), tempsec_connectors::ConnectorError> {
//! use tempsec_connectors::{spawn_polling, MemorySource, Monitor, PollOutcome};
//! use tempsec_core::MonitorSettings;
//!
//! let settings = MonitorSettings::default();
//! let monitor = Monitor::new(MemorySource::new(), &settings)?;
//! let (handle, mut outcomes) = spawn_polling(monitor, settings.reading_interval())?;
//!
//! while let Some(outcome) = outcomes.recv().await {
//!     if let Ok(PollOutcome::Fresh { classification, .. }) = outcome {
//!         println!("{}", classification.message());
//!         break;
//!     }
//! }
//! handle.stop().await?;
//! # Ok(())
//! # }
//! ```
//!
//! Polling ends when `stop` is called, when the handle is dropped, when the
//! receiver is dropped, or after a poll reports [`ConnectorError::Closed`].

use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::{debug, error};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::{
    monitor::{Monitor, PollOutcome},
    ConnectorError, ConnectorResult, ReadingSource,
};

/// Outcomes buffered before the driver waits for the host
pub const OUTCOME_CHANNEL_CAPACITY: usize = 16;

/// Monitor shared between the driver and the host
pub type SharedMonitor<S> = Arc<Mutex<Monitor<S>>>;

/// Handle to a running polling driver
pub struct PollingHandle<S> {
    stop: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
    monitor: SharedMonitor<S>,
}

impl<S> PollingHandle<S> {
    /// The monitor being polled, for settings updates and the alert log
    pub fn monitor(&self) -> SharedMonitor<S> {
        Arc::clone(&self.monitor)
    }

    /// True once the driver has exited
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop polling and wait for the driver to exit
    pub async fn stop(mut self) -> ConnectorResult<()> {
        if let Some(stop) = self.stop.take() {
            // the driver may already be gone
            let _ = stop.send(());
        }
        self.task.await.map_err(|_| ConnectorError::Closed)
    }
}

/// Start polling `monitor` every `interval`
///
/// Must be called from within a tokio runtime.
pub fn spawn_polling<S>(
    monitor: Monitor<S>,
    interval: Duration,
) -> ConnectorResult<(PollingHandle<S>, mpsc::Receiver<ConnectorResult<PollOutcome>>)>
where
    S: ReadingSource + 'static,
{
    if interval.is_zero() {
        return Err(ConnectorError::Config("Polling interval must be greater than zero".into()));
    }

    let monitor = Arc::new(Mutex::new(monitor));
    let (tx, rx) = mpsc::channel(OUTCOME_CHANNEL_CAPACITY);
    let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

    let shared = Arc::clone(&monitor);
    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        debug!("polling every {:?}", interval);

        loop {
            tokio::select! {
                _ = &mut stop_rx => {
                    debug!("polling stopped");
                    break;
                }
                _ = ticker.tick() => {
                    let outcome = poll_blocking(Arc::clone(&shared)).await;
                    let closed = matches!(outcome, Err(ConnectorError::Closed));

                    // a host that stops draining must not block stop()
                    tokio::select! {
                        _ = &mut stop_rx => {
                            debug!("polling stopped with outcomes undelivered");
                            break;
                        }
                        sent = tx.send(outcome) => {
                            if sent.is_err() {
                                debug!("outcome receiver dropped, polling stopped");
                                break;
                            }
                        }
                    }

                    if closed {
                        error!("monitor unavailable, polling stopped");
                        break;
                    }
                }
            }
        }
    });

    Ok((
        PollingHandle {
            stop: Some(stop_tx),
            task,
            monitor,
        },
        rx,
    ))
}

async fn poll_blocking<S>(monitor: SharedMonitor<S>) -> ConnectorResult<PollOutcome>
where
    S: ReadingSource + 'static,
{
    let joined = tokio::task::spawn_blocking(move || {
        let mut monitor = monitor.lock().map_err(|_| ConnectorError::Closed)?;
        monitor.poll_once()
    })
    .await;

    match joined {
        Ok(outcome) => outcome,
        Err(join_error) => {
            error!("poll task failed: {}", join_error);
            Err(ConnectorError::Closed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemorySource;
    use tempsec_core::{MonitorSettings, RawReading};

    fn monitor(rows: &[(&str, f64)]) -> Monitor<MemorySource> {
        let source = MemorySource::with_rows(rows.iter().map(|(data, valor)| RawReading {
            data: data.to_string(),
            valor: *valor,
        }));
        Monitor::new(source, &MonitorSettings::default()).unwrap()
    }

    #[tokio::test]
    async fn delivers_outcomes_in_order() {
        let monitor = monitor(&[("2024-05-01T08:00:00Z", 37.0), ("2024-05-01T08:05:00Z", 46.0)]);
        let (handle, mut rx) = spawn_polling(monitor, Duration::from_millis(10)).unwrap();

        let first = rx.recv().await.unwrap().unwrap();
        let second = rx.recv().await.unwrap().unwrap();
        let third = rx.recv().await.unwrap().unwrap();

        assert!(first.is_fresh());
        match second {
            PollOutcome::Fresh { alert, .. } => assert!(alert.is_some()),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(third, PollOutcome::Unchanged);

        let shared = handle.monitor();
        assert_eq!(shared.lock().unwrap().alerts().len(), 1);

        handle.stop().await.unwrap();
    }

    #[tokio::test]
    async fn errors_are_forwarded_and_polling_continues() {
        let mut monitor = monitor(&[("2024-05-01T08:00:00Z", 37.0)]);
        monitor
            .source_mut()
            .fail_next(ConnectorError::Request("timeout".into()));
        let (handle, mut rx) = spawn_polling(monitor, Duration::from_millis(10)).unwrap();

        assert!(matches!(rx.recv().await.unwrap(), Err(ConnectorError::Request(_))));
        assert!(rx.recv().await.unwrap().unwrap().is_fresh());

        handle.stop().await.unwrap();
    }

    #[tokio::test]
    async fn dropping_receiver_ends_driver() {
        let monitor = monitor(&[("2024-05-01T08:00:00Z", 37.0)]);
        let (handle, rx) = spawn_polling(monitor, Duration::from_millis(5)).unwrap();
        drop(rx);

        for _ in 0..100 {
            if handle.is_finished() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        assert!(handle.is_finished());
        handle.stop().await.unwrap();
    }

    #[tokio::test]
    async fn stop_completes_with_undrained_receiver() {
        let monitor = monitor(&[("2024-05-01T08:00:00Z", 37.0)]);
        let (handle, _rx) = spawn_polling(monitor, Duration::from_millis(1)).unwrap();

        // enough ticks to fill the channel
        tokio::time::sleep(Duration::from_millis(200)).await;

        let stopped = tokio::time::timeout(Duration::from_secs(3), handle.stop()).await;
        assert!(matches!(stopped, Ok(Ok(()))));
    }

    #[tokio::test]
    async fn poisoned_monitor_ends_driver() {
        let monitor = monitor(&[("2024-05-01T08:00:00Z", 37.0)]);
        let (handle, mut rx) = spawn_polling(monitor, Duration::from_millis(5)).unwrap();

        let shared = handle.monitor();
        let _ = std::thread::spawn(move || {
            let _guard = shared.lock().unwrap();
            panic!("poison the monitor");
        })
        .join();

        let mut last = None;
        while let Some(outcome) = rx.recv().await {
            last = Some(outcome);
        }
        assert!(matches!(last, Some(Err(ConnectorError::Closed))));
        handle.stop().await.unwrap();
    }

    #[tokio::test]
    async fn zero_interval_is_rejected() {
        let result = spawn_polling(monitor(&[]), Duration::ZERO);
        assert!(matches!(result, Err(ConnectorError::Config(_))));
    }
}
