use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::{rngs::StdRng, SeedableRng};

use crate::catalog::Catalog;
use crate::classify::CharState;
use crate::clock::{Clock, SystemClock};
use crate::metrics::Metrics;
use crate::session::{reset_session, Session};

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Terminal front end state: the active session plus the text-box model
/// feeding it.
#[derive(Debug)]
pub struct App {
    catalog: Catalog,
    session: Session,
    metrics: Metrics,
    clock: Box<dyn Clock>,
    rng: StdRng,
}

impl App {
    pub fn new(catalog: Catalog, random_start: bool) -> Self {
        Self::with_parts(
            catalog,
            Box::new(SystemClock),
            StdRng::from_entropy(),
            random_start,
        )
    }

    pub fn with_parts(
        catalog: Catalog,
        clock: Box<dyn Clock>,
        mut rng: StdRng,
        random_start: bool,
    ) -> Self {
        let session = if random_start {
            reset_session(&catalog, &mut rng)
        } else {
            Session::new(catalog.first().clone())
        };
        tracing::info!(
            catalog = catalog.name(),
            snippets = catalog.len(),
            target_len = session.target().char_count(),
            "session started"
        );

        Self {
            catalog,
            session,
            metrics: Metrics::default(),
            clock,
            rng,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    /// Target chars paired with how each should be displayed
    pub fn char_states(&self) -> Vec<(char, CharState)> {
        self.session
            .target()
            .as_str()
            .chars()
            .zip(self.session.classify())
            .collect()
    }

    /// Swap in a random snippet from the catalog
    pub fn new_snippet(&mut self) {
        self.session = reset_session(&self.catalog, &mut self.rng);
        self.metrics = Metrics::default();
        tracing::info!(
            target_len = self.session.target().char_count(),
            "new snippet"
        );
    }

    /// Start over on the current snippet
    pub fn restart(&mut self) {
        self.session = self.session.restart();
        self.metrics = Metrics::default();
        tracing::info!("session restarted");
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Flow {
        let ctrl = is_ctrl_chord(key.modifiers);

        match key.code {
            KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('c') if ctrl => return Flow::Quit,
            KeyCode::Char('n') if ctrl => self.new_snippet(),
            KeyCode::Right => self.new_snippet(),
            KeyCode::Left => self.restart(),
            _ if self.session.is_completed() => return self.on_completed_key(key),
            _ => self.on_typing_key(key),
        }
        Flow::Continue
    }

    fn on_completed_key(&mut self, key: KeyEvent) -> Flow {
        match key.code {
            KeyCode::Char('n') => self.new_snippet(),
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('q') => return Flow::Quit,
            _ => {}
        }
        Flow::Continue
    }

    fn on_typing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('u') if is_ctrl_chord(key.modifiers) => self.edit(String::clear),
            KeyCode::Char(c) if is_text_input(key.modifiers) => self.edit(|text| text.push(c)),
            KeyCode::Enter => self.edit(|text| text.push('\n')),
            KeyCode::Backspace => self.edit(|text| {
                text.pop();
            }),
            _ => {}
        }
    }

    /// Applies an edit to the typed text and records the whole new content
    fn edit<F: FnOnce(&mut String)>(&mut self, f: F) {
        let mut text = self.session.input().to_string();
        f(&mut text);
        if text == self.session.input() {
            return;
        }
        self.metrics = self.session.record_input(text, self.clock.as_ref());
    }
}

/// Ctrl without Alt. Ctrl+Alt together is how Windows reports AltGr.
fn is_ctrl_chord(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) && !modifiers.contains(KeyModifiers::ALT)
}

/// Plain or shifted keys, plus AltGr combinations (`{`, `[`, `@` on many layouts)
fn is_text_input(modifiers: KeyModifiers) -> bool {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let alt = modifiers.contains(KeyModifiers::ALT);
    ctrl == alt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app(texts: &[&str]) -> (App, ManualClock) {
        let clock = ManualClock::new();
        let catalog = Catalog::from_texts("test", texts.iter().copied()).unwrap();
        let app = App::with_parts(
            catalog,
            Box::new(clock.clone()),
            StdRng::seed_from_u64(42),
            false,
        );
        (app, clock)
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            let code = if c == '\n' {
                KeyCode::Enter
            } else {
                KeyCode::Char(c)
            };
            app.on_key(key(code));
        }
    }

    #[test]
    fn test_starts_on_first_snippet() {
        let (app, _) = app(&["first", "second"]);
        assert_eq!(app.session().target().as_str(), "first");
        assert_eq!(app.metrics(), Metrics::default());
    }

    #[test]
    fn test_typing_updates_metrics() {
        let (mut app, clock) = app(&["hello world"]);

        type_str(&mut app, "h");
        clock.advance(Duration::from_secs(6));
        type_str(&mut app, "ell");

        // 4 chars = 0.8 words in 0.1 minutes
        assert_eq!(app.metrics().speed, 8);
        assert_eq!(app.metrics().accuracy, 100);
        assert_eq!(app.metrics().progress, 36);
    }

    #[test]
    fn test_enter_types_newline() {
        let (mut app, _) = app(&["a\nb"]);
        type_str(&mut app, "a\nb");
        assert!(app.session().is_completed());
    }

    #[test]
    fn test_backspace_and_clear() {
        let (mut app, _) = app(&["abc"]);
        type_str(&mut app, "ax");
        app.on_key(key(KeyCode::Backspace));
        assert_eq!(app.session().input(), "a");
        assert_eq!(app.metrics().accuracy, 100);

        app.on_key(ctrl('u'));
        assert_eq!(app.session().input(), "");
        assert_eq!(app.metrics(), Metrics::default());
        assert!(app.session().has_started());
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let (mut app, _) = app(&["abc"]);
        app.on_key(key(KeyCode::Backspace));
        assert!(!app.session().has_started());
    }

    #[test]
    fn test_input_ignored_after_completion() {
        let (mut app, _) = app(&["ab"]);
        type_str(&mut app, "ab");
        assert!(app.session().is_completed());

        app.on_key(key(KeyCode::Backspace));
        type_str(&mut app, "x");

        assert_eq!(app.session().input(), "ab");
        assert!(app.session().is_completed());
    }

    #[test]
    fn test_restart_after_completion() {
        let (mut app, _) = app(&["ab", "cd"]);
        type_str(&mut app, "ab");

        assert_eq!(app.on_key(key(KeyCode::Char('r'))), Flow::Continue);

        assert_eq!(app.session().target().as_str(), "ab");
        assert_eq!(app.session().input(), "");
        assert!(!app.session().is_completed());
    }

    #[test]
    fn test_new_snippet_stays_in_catalog() {
        let (mut app, _) = app(&["ab", "cd", "ef"]);
        for _ in 0..20 {
            app.on_key(ctrl('n'));
            assert!(app.catalog().contains(app.session().target()));
            assert!(!app.session().has_started());
        }
    }

    #[test]
    fn test_letters_type_while_not_completed() {
        let (mut app, _) = app(&["nrq"]);
        type_str(&mut app, "nr");
        assert_eq!(app.session().input(), "nr");
        assert_eq!(app.on_key(key(KeyCode::Char('q'))), Flow::Continue);
        assert!(app.session().is_completed());
    }

    #[test]
    fn test_altgr_chars_are_typed() {
        let (mut app, _) = app(&["{}"]);
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;

        app.on_key(KeyEvent::new(KeyCode::Char('{'), altgr));
        assert_eq!(app.session().input(), "{");

        app.on_key(KeyEvent::new(KeyCode::Char('}'), altgr));
        assert!(app.session().is_completed());
    }

    #[test]
    fn test_altgr_does_not_trigger_ctrl_shortcuts() {
        let (mut app, _) = app(&["cun"]);
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;

        assert_eq!(app.on_key(KeyEvent::new(KeyCode::Char('c'), altgr)), Flow::Continue);
        app.on_key(KeyEvent::new(KeyCode::Char('u'), altgr));
        app.on_key(KeyEvent::new(KeyCode::Char('n'), altgr));

        assert_eq!(app.session().input(), "cun");
    }

    #[test]
    fn test_alt_only_is_not_text() {
        let (mut app, _) = app(&["ab"]);
        app.on_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT));
        assert_eq!(app.session().input(), "");
    }

    #[test]
    fn test_quit_keys() {
        let (mut app, _) = app(&["ab"]);
        assert_eq!(app.on_key(key(KeyCode::Esc)), Flow::Quit);
        assert_eq!(app.on_key(ctrl('c')), Flow::Quit);

        type_str(&mut app, "ab");
        assert_eq!(app.on_key(key(KeyCode::Char('q'))), Flow::Quit);
    }

    #[test]
    fn test_char_states_pair_target_chars() {
        let (mut app, _) = app(&["abc"]);
        type_str(&mut app, "ax");

        assert_eq!(
            app.char_states(),
            vec![
                ('a', CharState::Correct),
                ('b', CharState::Mismatch),
                ('c', CharState::Cursor),
            ]
        );
    }
}
