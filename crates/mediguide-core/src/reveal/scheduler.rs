//! Paced reveal scheduler
//!
//! Appends fragments to a sink one per tick. A new `start_reveal` makes the
//! previous session's pending ticks stale: they are recognised by their
//! generation and ignored, so nothing has to be cancelled explicitly.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, trace};

use super::config::RevealConfig;
use super::session::{Generation, RevealSession, RevealState};
use super::sink::Sink;
use super::timer::{Tick, Timer, VirtualClock};
use crate::classify::Fragment;
use crate::error::ConfigResult;
use crate::render::render;

/// Result of delivering one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StepOutcome {
    /// Tick belongs to a superseded or finished session; nothing happened
    Stale,
    /// Sink went away; the session ended silently
    Detached,
    /// One fragment appended; `cursor` is the index of the next one
    Appended { cursor: usize },
    /// Cursor reached the end; the session is done
    Finished,
}

/// Single-owner reveal state machine for one sink
pub struct RevealScheduler<S> {
    sink: S,
    config: RevealConfig,
    live: Option<Generation>,
    session: Option<RevealSession>,
    state: RevealState,
}

impl<S: Sink> RevealScheduler<S> {
    /// Scheduler with default pacing
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            config: RevealConfig::default(),
            live: None,
            session: None,
            state: RevealState::Idle,
        }
    }

    /// Scheduler with validated pacing
    pub fn with_config(sink: S, config: RevealConfig) -> ConfigResult<Self> {
        config.validate()?;
        let mut scheduler = Self::new(sink);
        scheduler.config = config;
        Ok(scheduler)
    }

    /// Begin revealing `fragments`, superseding any reveal in flight.
    ///
    /// Clears the sink, installs a fresh generation as live and schedules the
    /// first step with no delay.
    pub fn start_reveal<T>(&mut self, fragments: Vec<Fragment>, timer: &mut T) -> Generation
    where
        T: Timer + ?Sized,
    {
        if let Some(previous) = self.session.as_mut().filter(|s| s.is_active()) {
            previous.deactivate();
            debug!(
                generation = %previous.generation(),
                revealed = previous.cursor(),
                dropped = previous.remaining().len(),
                "reveal superseded"
            );
        }

        self.sink.clear();

        // Live generation must be installed before the first tick exists
        let generation = Generation::next();
        self.live = Some(generation);
        debug!(%generation, fragments = fragments.len(), "reveal started");
        self.session = Some(RevealSession::new(generation, fragments));
        self.state = RevealState::Revealing;

        timer.after(Duration::ZERO, Tick::new(generation));
        generation
    }

    /// Execute one step for a delivered tick
    pub fn step<T>(&mut self, tick: Tick, timer: &mut T) -> StepOutcome
    where
        T: Timer + ?Sized,
    {
        if self.live != Some(tick.generation) {
            trace!(generation = %tick.generation, "stale tick ignored");
            return StepOutcome::Stale;
        }

        let session = match self.session.as_mut() {
            Some(session) if session.is_active() => session,
            _ => return StepOutcome::Stale,
        };

        if !self.sink.is_available() {
            session.deactivate();
            self.state = RevealState::Superseded;
            debug!(generation = %tick.generation, "sink unavailable, reveal stopped");
            return StepOutcome::Detached;
        }

        if session.is_exhausted() {
            session.deactivate();
            self.state = RevealState::Done;
            debug!(generation = %tick.generation, total = session.len(), "reveal done");
            return StepOutcome::Finished;
        }

        let rendered = match session.advance() {
            Some(fragment) => render(fragment),
            None => return StepOutcome::Finished,
        };
        self.sink.append(&rendered);
        let cursor = session.cursor();
        trace!(generation = %tick.generation, cursor, category = %rendered.category, "fragment appended");

        timer.after(self.config.fragment_delay(), tick);
        StepOutcome::Appended { cursor }
    }

    /// Deliver ticks from a virtual clock until it runs dry.
    ///
    /// Returns the number of steps executed, stale ones included.
    pub fn run_to_completion(&mut self, clock: &mut VirtualClock) -> usize {
        let mut steps = 0;
        while let Some(tick) = clock.pop_next() {
            self.step(tick, clock);
            steps += 1;
        }
        steps
    }

    /// Deliver the ticks falling due within the next `by` of virtual time.
    ///
    /// Ticks are stepped one at a time as they come due, so each follow-up is
    /// scheduled from its own delivery time. The clock ends at `now + by`.
    pub fn run_for(&mut self, clock: &mut VirtualClock, by: Duration) -> usize {
        let deadline = clock.now() + by;
        let mut steps = 0;
        while let Some(tick) = clock.pop_until(deadline) {
            self.step(tick, clock);
            steps += 1;
        }
        steps
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn live_generation(&self) -> Option<Generation> {
        self.live
    }

    pub fn session(&self) -> Option<&RevealSession> {
        self.session.as_ref()
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
