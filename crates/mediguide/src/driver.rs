//! Async reveal driver on tokio
//!
//! Timers only deliver ticks into a channel; every step runs on the task
//! that owns the driver, one at a time.

use std::time::Duration;

use mediguide_core::{
    Fragment, Generation, RevealConfig, RevealScheduler, RevealState, Sink, StepOutcome, Tick,
    Timer,
};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::error::Result;
use crate::tracing::prefix;

/// `Timer` backed by `tokio::time::sleep`
pub struct TokioTimer {
    tx: mpsc::UnboundedSender<Tick>,
    pending: Vec<JoinHandle<()>>,
}

impl TokioTimer {
    pub fn new(tx: mpsc::UnboundedSender<Tick>) -> Self {
        Self {
            tx,
            pending: Vec::new(),
        }
    }

    /// Abort sleeps that have not fired yet.
    ///
    /// Only saves wakeups; stale ticks are rejected by the scheduler anyway.
    pub fn cancel_pending(&mut self) {
        for handle in self.pending.drain(..) {
            handle.abort();
        }
    }

    /// Sleeps still outstanding
    pub fn pending(&self) -> usize {
        self.pending.iter().filter(|h| !h.is_finished()).count()
    }
}

impl Timer for TokioTimer {
    fn after(&mut self, delay: Duration, tick: Tick) {
        self.pending.retain(|h| !h.is_finished());

        if delay.is_zero() {
            deliver(&self.tx, tick);
            return;
        }

        let tx = self.tx.clone();
        self.pending.push(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            deliver(&tx, tick);
        }));
    }
}

fn deliver(tx: &mpsc::UnboundedSender<Tick>, tick: Tick) {
    if tx.send(tick).is_err() {
        trace!(generation = %tick.generation, "tick dropped, driver gone");
    }
}

/// Owns a scheduler and feeds it ticks from tokio timers
pub struct RevealDriver<S: Sink> {
    scheduler: RevealScheduler<S>,
    timer: TokioTimer,
    ticks: mpsc::UnboundedReceiver<Tick>,
}

impl<S: Sink> RevealDriver<S> {
    pub fn new(sink: S, config: RevealConfig) -> Result<Self> {
        let scheduler = RevealScheduler::with_config(sink, config)?;
        let (tx, ticks) = mpsc::unbounded_channel();
        Ok(Self {
            scheduler,
            timer: TokioTimer::new(tx),
            ticks,
        })
    }

    /// Start revealing `fragments`, superseding the current reveal
    pub fn start(&mut self, fragments: Vec<Fragment>) -> Generation {
        let cancelled = self.timer.pending();
        self.timer.cancel_pending();
        let generation = self.scheduler.start_reveal(fragments, &mut self.timer);
        debug!(cancelled, "{} reveal {} queued", prefix::REVEAL, generation);
        generation
    }

    /// Wait for the next tick and run its step.
    ///
    /// Returns `None` when nothing is revealing, since no tick will come.
    pub async fn next_step(&mut self) -> Option<StepOutcome> {
        if self.scheduler.state() != RevealState::Revealing {
            return None;
        }
        let tick = self.ticks.recv().await?;
        Some(self.scheduler.step(tick, &mut self.timer))
    }

    /// Drive the current reveal until it is done or superseded
    pub async fn finish(&mut self) {
        while self.next_step().await.is_some() {}
    }

    /// Reveal each received fragment list, newest superseding older ones.
    ///
    /// Returns the sink once `requests` is closed and the last reveal has
    /// ended.
    pub async fn run(mut self, mut requests: mpsc::Receiver<Vec<Fragment>>) -> S {
        let mut inputs_open = true;
        loop {
            tokio::select! {
                biased;

                request = requests.recv(), if inputs_open => match request {
                    Some(fragments) => {
                        self.start(fragments);
                    }
                    None => inputs_open = false,
                },
                Some(tick) = self.ticks.recv() => {
                    self.scheduler.step(tick, &mut self.timer);
                }
            }

            if !inputs_open && self.scheduler.state() != RevealState::Revealing {
                break;
            }
        }
        self.timer.cancel_pending();
        debug!("{} reveal driver stopped", prefix::CLOSE);
        self.scheduler.into_sink()
    }

    pub fn state(&self) -> RevealState {
        self.scheduler.state()
    }

    pub fn scheduler(&self) -> &RevealScheduler<S> {
        &self.scheduler
    }

    pub fn into_sink(self) -> S {
        self.scheduler.into_sink()
    }
}

/// Reveal one fragment list to completion and hand the sink back
pub async fn reveal_once<S: Sink>(
    sink: S,
    config: RevealConfig,
    fragments: Vec<Fragment>,
) -> Result<S> {
    let mut driver = RevealDriver::new(sink, config)?;
    driver.start(fragments);
    driver.finish().await;
    Ok(driver.into_sink())
}
