//! Reveal scheduling over a virtual clock

use std::time::Duration;

use mediguide_core::{
    classify_response, Category, Fragment, RenderedFragment, RevealConfig, RevealScheduler,
    RevealState, Sink, StepOutcome, VecSink, VirtualClock,
};
use pretty_assertions::assert_eq;

const FEVER: &str = "Take paracetamol tablet for fever. See a doctor if fever persists.";
const COLD: &str = "Drink plenty of fluids and rest. Colds pass in a week. Apply a warm compress.";

/// Sink recording every call, including which reveal wrote it
#[derive(Default)]
struct RecordingSink {
    events: Vec<String>,
}

impl Sink for RecordingSink {
    fn clear(&mut self) {
        self.events.push("clear".to_string());
    }

    fn append(&mut self, fragment: &RenderedFragment) {
        self.events.push(fragment.to_string());
    }
}

#[test]
fn test_reveal_is_paced() {
    let mut clock = VirtualClock::new();
    let mut scheduler = RevealScheduler::new(VecSink::new());
    scheduler.start_reveal(classify_response(COLD), &mut clock);

    // First fragment right away
    scheduler.run_for(&mut clock, Duration::ZERO);
    assert_eq!(scheduler.sink().fragments().len(), 1);

    // Nothing more before the delay elapses
    scheduler.run_for(&mut clock, Duration::from_millis(299));
    assert_eq!(scheduler.sink().fragments().len(), 1);

    scheduler.run_for(&mut clock, Duration::from_millis(1));
    assert_eq!(scheduler.sink().fragments().len(), 2);
    assert_eq!(scheduler.state(), RevealState::Revealing);

    scheduler.run_to_completion(&mut clock);
    assert_eq!(scheduler.state(), RevealState::Done);
    assert_eq!(
        scheduler.sink().lines(),
        vec![
            "🏠 Home Care: Drink plenty of fluids and rest",
            "Colds pass in a week.",
            "🏠 Home Care: Apply a warm compress",
        ]
    );
    // Three appends, then the terminating step one delay later
    assert_eq!(clock.now(), Duration::from_millis(900));
}

#[test]
fn test_long_window_keeps_fragment_spacing() {
    let mut clock = VirtualClock::new();
    let mut scheduler = RevealScheduler::new(VecSink::new());
    scheduler.start_reveal(classify_response(COLD), &mut clock);

    // 0, 300 and 600 ms appends, then the terminating step at 900 ms
    assert_eq!(scheduler.run_for(&mut clock, Duration::from_millis(400)), 2);
    assert_eq!(scheduler.sink().fragments().len(), 2);
    assert_eq!(clock.next_due(), Some(Duration::from_millis(600)));

    assert_eq!(scheduler.run_for(&mut clock, Duration::from_millis(600)), 2);
    assert_eq!(scheduler.state(), RevealState::Done);
    assert_eq!(clock.now(), Duration::from_millis(1000));
    assert!(clock.is_idle());
}

#[test]
fn test_done_after_one_append_per_fragment() {
    let fragments = classify_response(COLD);
    let total = fragments.len();

    let mut clock = VirtualClock::new();
    let mut scheduler = RevealScheduler::new(VecSink::new());
    scheduler.start_reveal(fragments, &mut clock);

    let mut appended = 0;
    let mut finished = 0;
    while let Some(tick) = clock.pop_next() {
        match scheduler.step(tick, &mut clock) {
            StepOutcome::Appended { cursor } => {
                appended += 1;
                assert_eq!(cursor, appended);
            }
            StepOutcome::Finished => finished += 1,
            other => panic!("unexpected outcome {other:?}"),
        }
    }
    assert_eq!(appended, total);
    assert_eq!(finished, 1);
    assert_eq!(scheduler.sink().append_count(), total);
}

#[test]
fn test_second_question_replaces_first() {
    let mut clock = VirtualClock::new();
    let mut scheduler = RevealScheduler::new(VecSink::new());

    scheduler.start_reveal(classify_response(COLD), &mut clock);
    let tick = clock.pop_next().unwrap();
    scheduler.step(tick, &mut clock);

    scheduler.start_reveal(classify_response(FEVER), &mut clock);
    scheduler.run_to_completion(&mut clock);

    assert_eq!(
        scheduler.sink().lines(),
        vec![
            "💊 Tablet Recommendation: Take paracetamol tablet for fever",
            "👨‍⚕️ When to See Doctor: See a doctor if fever persists",
        ]
    );
    assert_eq!(scheduler.state(), RevealState::Done);
}

#[test]
fn test_back_to_back_starts_emit_nothing_from_first() {
    let mut clock = VirtualClock::new();
    let mut scheduler = RevealScheduler::new(RecordingSink::default());

    scheduler.start_reveal(classify_response(COLD), &mut clock);
    scheduler.start_reveal(classify_response(FEVER), &mut clock);
    scheduler.run_to_completion(&mut clock);

    assert_eq!(
        scheduler.into_sink().events,
        vec![
            "clear",
            "clear",
            "💊 Tablet Recommendation: Take paracetamol tablet for fever",
            "👨‍⚕️ When to See Doctor: See a doctor if fever persists",
        ]
    );
}

#[test]
fn test_stale_ticks_never_write_even_when_delivered_late() {
    let mut clock = VirtualClock::new();
    let mut scheduler = RevealScheduler::new(VecSink::new());

    let old = scheduler.start_reveal(
        vec![
            Fragment::new(Category::Plain, "old one"),
            Fragment::new(Category::Plain, "old two"),
        ],
        &mut clock,
    );
    let first_tick = clock.pop_next().unwrap();
    scheduler.step(first_tick, &mut clock);
    let held = clock.pop_next().unwrap();
    assert_eq!(held.generation, old);

    scheduler.start_reveal(vec![Fragment::new(Category::Plain, "new")], &mut clock);
    assert_eq!(scheduler.step(held, &mut clock), StepOutcome::Stale);
    scheduler.run_to_completion(&mut clock);

    assert_eq!(scheduler.sink().lines(), vec!["new."]);
}

#[test]
fn test_restart_after_done() {
    let mut clock = VirtualClock::new();
    let mut scheduler =
        RevealScheduler::with_config(VecSink::new(), RevealConfig::with_delay_ms(10)).unwrap();

    scheduler.start_reveal(classify_response("One. Two."), &mut clock);
    scheduler.run_to_completion(&mut clock);
    assert_eq!(scheduler.state(), RevealState::Done);

    scheduler.start_reveal(classify_response("Three."), &mut clock);
    assert_eq!(scheduler.state(), RevealState::Revealing);
    scheduler.run_to_completion(&mut clock);
    assert_eq!(scheduler.sink().lines(), vec!["Three."]);
    assert_eq!(scheduler.sink().clear_count(), 2);
}
