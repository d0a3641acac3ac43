use std::time::Duration;

use codetype::{classify, reset_session, Catalog, CharState, ManualClock, Session, Snippet, SnippetSet};
use rand::{rngs::StdRng, SeedableRng};

const TARGETS: &[&str] = &[
    "a",
    "abc",
    "fibonacci",
    "fn main() {\n    println!(\"hi\");\n}",
    "naïve → café",
];

fn session(text: &str) -> Session {
    Session::new(Snippet::new(text).unwrap())
}

#[test]
fn exact_input_completes_every_target() {
    let clock = ManualClock::new();
    for target in TARGETS {
        let mut s = session(target);
        let m = s.record_input(*target, &clock);
        assert!(s.is_completed(), "{target:?} should complete");
        assert_eq!(m.progress, 100);
        assert_eq!(m.accuracy, 100);
    }
}

#[test]
fn empty_input_yields_neutral_metrics() {
    let clock = ManualClock::new();
    for target in TARGETS {
        let mut s = session(target);
        let m = s.record_input("", &clock);
        assert_eq!((m.speed, m.accuracy, m.progress), (0, 100, 0));
    }
}

#[test]
fn classify_length_matches_target() {
    for target in TARGETS {
        let len = target.chars().count();
        for input in ["", "a", "abc", "zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz", *target] {
            assert_eq!(classify(target, input).len(), len);
        }
    }
}

#[test]
fn cursor_sits_after_input() {
    let states = classify("abcdef", "abx");
    assert_eq!(states[3], CharState::Cursor);
    assert_eq!(
        states.iter().filter(|s| **s == CharState::Cursor).count(),
        1
    );
    assert!(states[4..].iter().all(|s| *s == CharState::Pending));
}

#[test]
fn completion_survives_later_edits() {
    let clock = ManualClock::new();
    let mut s = session("abc");
    s.record_input("abc", &clock);
    for edit in ["ab", "", "xyz", "abcd"] {
        s.record_input(edit, &clock);
        assert!(s.is_completed());
    }
}

#[test]
fn percentages_stay_in_range() {
    let clock = ManualClock::new();
    for target in TARGETS {
        let mut s = session(target);
        let mut input = String::new();
        for c in target.chars().chain("extra text past the end".chars()) {
            input.push(if c == 'a' { 'q' } else { c });
            clock.advance(Duration::from_millis(50));
            let m = s.record_input(input.clone(), &clock);
            assert!(m.accuracy <= 100);
            assert!(m.progress <= 100);
        }
    }
}

#[test]
fn mismatch_scenario() {
    let clock = ManualClock::new();
    let mut s = session("abc");
    let m = s.record_input("abd", &clock);
    assert_eq!(m.accuracy, 67);
    assert_eq!(m.progress, 100);
    assert!(!s.is_completed());
}

#[test]
fn speed_scenario() {
    let clock = ManualClock::new();
    let mut s = session("fibonacci");
    s.record_input("f", &clock);
    clock.advance(Duration::from_secs(30));
    let m = s.record_input("fibo", &clock);
    assert_eq!(m.speed, 2);
}

#[test]
fn reset_session_draws_from_catalog() {
    let catalog = Catalog::builtin(SnippetSet::Javascript).unwrap();
    assert_eq!(catalog.len(), 7);
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..100 {
        let s = reset_session(&catalog, &mut rng);
        assert!(catalog.contains(s.target()));
        assert_eq!(s.input(), "");
        assert!(s.started_at().is_none());
        assert!(!s.is_completed());
    }
}
