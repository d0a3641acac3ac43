use std::time::{Duration, Instant};

/// Characters that make up one "word" in the WPM convention
pub const CHARS_PER_WORD: f64 = 5.0;

/// Lower bound on elapsed minutes so speed never divides by zero
pub const MIN_ELAPSED_MINUTES: f64 = 0.01;

/// Live figures shown while typing. Derived from a session, never stored in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    /// words per minute
    pub speed: u32,
    /// percent of typed chars that match the target, 0..=100
    pub accuracy: u8,
    /// percent of the target covered by the input, 0..=100
    pub progress: u8,
}

impl Default for Metrics {
    /// Figures for a session nobody has typed into yet
    fn default() -> Self {
        Self {
            speed: 0,
            accuracy: 100,
            progress: 0,
        }
    }
}

impl Metrics {
    pub fn compute(target: &str, input: &str, started_at: Option<Instant>, now: Instant) -> Self {
        let typed = input.chars().count();
        if typed == 0 {
            return Self::default();
        }

        let elapsed = started_at
            .map(|start| now.saturating_duration_since(start))
            .unwrap_or(Duration::ZERO);

        Self {
            speed: speed(typed, elapsed),
            accuracy: accuracy(target, input),
            progress: progress(typed, target.chars().count()),
        }
    }
}

/// WPM for `typed` chars over `elapsed`, with elapsed floored at
/// [`MIN_ELAPSED_MINUTES`]
pub fn speed(typed: usize, elapsed: Duration) -> u32 {
    if typed == 0 {
        return 0;
    }
    let minutes = (elapsed.as_secs_f64() / 60.0).max(MIN_ELAPSED_MINUTES);
    let words = typed as f64 / CHARS_PER_WORD;
    (words / minutes).round() as u32
}

/// Share of `input` chars equal to the target char at the same position.
/// Chars past the end of the target count as misses.
pub fn accuracy(target: &str, input: &str) -> u8 {
    let typed = input.chars().count();
    if typed == 0 {
        return 100;
    }
    let matches = input
        .chars()
        .zip(target.chars())
        .filter(|(got, expected)| got == expected)
        .count();
    percent(matches, typed)
}

/// Share of the target covered by `typed` chars, capped at 100
pub fn progress(typed: usize, target_len: usize) -> u8 {
    if target_len == 0 {
        return 0;
    }
    percent(typed.min(target_len), target_len)
}

fn percent(part: usize, whole: usize) -> u8 {
    (100.0 * part as f64 / whole as f64).round() as u8
}
