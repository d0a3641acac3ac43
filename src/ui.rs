use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::{app::App, classify::CharState};

const HORIZONTAL_MARGIN: u16 = 2;
const VERTICAL_MARGIN: u16 = 1;

const LEGEND_TYPING: &str = "(esc) quit  (ctrl+n / →) new snippet  (←) restart  (ctrl+u) clear";
const LEGEND_DONE: &str = "(n) new snippet  (r) restart  (q) quit";

fn char_style(state: CharState) -> Style {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    match state {
        CharState::Correct => bold_style.fg(Color::Green),
        CharState::Mismatch => bold_style.fg(Color::Red).bg(Color::Rgb(60, 0, 0)),
        CharState::Cursor => bold_style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED),
        CharState::Pending => bold_style.add_modifier(Modifier::DIM),
    }
}

/// Splits the styled target into display lines. Newlines are not drawn unless
/// they are mistyped or sit under the cursor.
pub fn snippet_lines(states: &[(char, CharState)]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans = Vec::new();

    for &(c, state) in states {
        if c == '\n' {
            if matches!(state, CharState::Mismatch | CharState::Cursor) {
                spans.push(Span::styled("⏎", char_style(state)));
            }
            lines.push(Line::from(std::mem::take(&mut spans)));
            continue;
        }
        let symbol = match (c, state) {
            (' ', CharState::Mismatch) => "·".to_owned(),
            (c, _) => c.to_string(),
        };
        spans.push(Span::styled(symbol, char_style(state)));
    }
    lines.push(Line::from(spans));
    lines
}

fn stat_card<'a>(title: &'a str, value: String, unit: &'a str) -> Paragraph<'a> {
    Paragraph::new(vec![
        Line::from(Span::styled(
            value,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(unit, Style::default().add_modifier(Modifier::DIM))),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title(title))
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let session = self.session();
        let metrics = self.metrics();
        let completed = session.is_completed();

        let lines = snippet_lines(&self.char_states());
        let snippet_height = clamp_u16(lines.len()).saturating_add(2);
        let snippet_width = clamp_u16(
            session
                .target()
                .as_str()
                .lines()
                .map(|l| l.width())
                .max()
                .unwrap_or(0),
        )
        .saturating_add(4);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(1),                             // title
                Constraint::Length(4),                             // stat cards
                Constraint::Length(if completed { 3 } else { 0 }), // banner
                Constraint::Length(snippet_height),                // snippet
                Constraint::Min(0),                                // padding
                Constraint::Length(1),                             // legend
            ])
            .split(area);

        Paragraph::new(Line::from(vec![
            Span::styled(
                "Code Typing",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} snippets", self.catalog().name()),
                Style::default().add_modifier(Modifier::ITALIC | Modifier::DIM),
            ),
        ]))
        .alignment(Alignment::Center)
        .render(chunks[0], buf);

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(chunks[1]);
        stat_card("Speed", metrics.speed.to_string(), "WPM").render(cards[0], buf);
        stat_card("Accuracy", format!("{}%", metrics.accuracy), "Correct").render(cards[1], buf);
        stat_card("Progress", format!("{}%", metrics.progress), "Complete").render(cards[2], buf);

        if completed {
            Paragraph::new(Span::styled(
                format!(
                    "Awesome Job! You completed the snippet at {} WPM with {}% accuracy!",
                    metrics.speed, metrics.accuracy
                ),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Green)),
            )
            .render(chunks[2], buf);
        }

        // center the snippet box when it is narrower than the screen
        let snippet_area = chunks[3];
        let width = snippet_width.min(snippet_area.width);
        let snippet_area = Rect {
            x: snippet_area.x + (snippet_area.width - width) / 2,
            width,
            ..snippet_area
        };
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" snippet {} chars ", session.target().char_count())),
            )
            .wrap(Wrap { trim: false })
            .render(snippet_area, buf);

        Paragraph::new(Span::styled(
            if completed { LEGEND_DONE } else { LEGEND_TYPING },
            Style::default().add_modifier(Modifier::ITALIC | Modifier::DIM),
        ))
        .alignment(Alignment::Center)
        .render(chunks[5], buf);
    }
}
