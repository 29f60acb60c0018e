//! Paced Reveal
//!
//! Discloses a fragment sequence to a sink one fragment per step:
//!
//! ```text
//! Idle ──start_reveal──► Revealing ──step (cursor == len)──► Done
//!                           │
//!                           └──start_reveal / sink gone──► Superseded
//! ```
//!
//! Steps are driven by ticks delivered through a [`Timer`]. The scheduler
//! never blocks; whoever owns it (a test with a [`VirtualClock`], or an async
//! driver) hands each tick back to [`RevealScheduler::step`].
//!
//! # Example
//!
//! ```rust
//! use mediguide_core::classify::classify_response;
//! use mediguide_core::reveal::{RevealScheduler, RevealState, VecSink, VirtualClock};
//!
//! let mut clock = VirtualClock::new();
//! let mut scheduler = RevealScheduler::new(VecSink::new());
//! scheduler.start_reveal(classify_response("Rest. Drink water."), &mut clock);
//! scheduler.run_to_completion(&mut clock);
//!
//! assert_eq!(scheduler.state(), RevealState::Done);
//! assert_eq!(scheduler.sink().fragments().len(), 2);
//! ```

pub mod config;
pub mod scheduler;
pub mod session;
pub mod sink;
pub mod timer;

pub use config::RevealConfig;
pub use scheduler::{RevealScheduler, StepOutcome};
pub use session::{Generation, RevealSession, RevealState};
pub use sink::{Sink, VecSink};
pub use timer::{Tick, Timer, VirtualClock};
