use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::Notify;

use crate::ui::events::AppEvent;

/// Lightweight handle for checking and requesting shutdown.
#[derive(Clone, Default)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    pub fn signal(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            tracing::info!("Shutdown requested");
            self.notify.notify_waiters();
        }
    }

    pub async fn wait(&self) {
        // Register before checking the flag so a concurrent signal() is not lost.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_shutting_down() {
            return;
        }
        notified.await;
    }
}

/// Forwards SIGINT/SIGTERM to the event loop as `AppEvent::Shutdown`.
///
/// The listener exits on its own once `handle` is signalled from elsewhere.
pub fn spawn_signal_listener(runtime: &Handle, handle: ShutdownHandle, events: Sender<AppEvent>) {
    runtime.spawn(async move {
        tokio::select! {
            _ = wait_for_signal() => {
                handle.signal();
                let _ = events.send(AppEvent::Shutdown);
            }
            _ = handle.wait() => {}
        }
    });
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let Ok(mut term) = signal(SignalKind::terminate()) else {
        let _ = tokio::signal::ctrl_c().await;
        return;
    };
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = term.recv() => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
