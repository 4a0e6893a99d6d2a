//! Per-question countdown task.

use std::sync::mpsc::Sender;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::ui::events::AppEvent;

/// Where countdowns are spawned and where their ticks go.
#[derive(Clone)]
pub struct CountdownSpawner {
    runtime: Handle,
    events: Sender<AppEvent>,
    period: Duration,
}

impl CountdownSpawner {
    pub fn new(runtime: Handle, events: Sender<AppEvent>, period: Duration) -> Self {
        Self {
            runtime,
            events,
            period,
        }
    }

    pub fn spawn(&self, generation: u64) -> Countdown {
        Countdown::start(&self.runtime, generation, self.period, self.events.clone())
    }
}

/// A running countdown. Dropping it stops the ticks.
pub struct Countdown {
    generation: u64,
    task: JoinHandle<()>,
}

impl Countdown {
    pub fn start(
        runtime: &Handle,
        generation: u64,
        period: Duration,
        events: Sender<AppEvent>,
    ) -> Self {
        let task = runtime.spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // First tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                if events.send(AppEvent::CountdownTick { generation }).is_err() {
                    break;
                }
            }
        });
        tracing::debug!(generation, "Countdown started");
        Self { generation, task }
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.task.abort();
        tracing::debug!(generation = self.generation, "Countdown stopped");
    }
}
