//! TUI rendering with ratatui
//!
//! Virtualized word list, position details and the search input.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{SENTINEL_INDEX, Space};
use crate::navigation::Entry;
use crate::output::formatters::{group_digits, split_match};
use num_traits::ToPrimitive;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(3),    // Word list
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);

    render_list(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDSPACE - every password, in order")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Word spans with the first match of `query` emphasized
fn word_spans<'a>(word: &'a str, query: &str, base: Style) -> Vec<Span<'a>> {
    match split_match(word, query) {
        Some((before, matched, after)) => vec![
            Span::styled(before, base),
            Span::styled(
                matched,
                base.fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ),
            Span::styled(after, base),
        ],
        None => vec![Span::styled(word, base)],
    }
}

fn entry_line<'a>(entry: &'a Entry, query: &str, current: bool) -> Line<'a> {
    let base = if current {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let marker = if current { "▶ " } else { "  " };

    let mut spans = vec![Span::styled(marker, base)];
    spans.extend(word_spans(entry.word.text(), query, base));
    spans.push(Span::styled(
        format!("  {}", group_digits(&entry.index)),
        Style::default().fg(Color::DarkGray),
    ));
    Line::from(spans)
}

fn render_list(f: &mut Frame, app: &App, area: Rect) {
    let view = app.view();
    let current = &app.current().index;
    let query = match app.input_mode {
        InputMode::Search => app.query.as_str(),
        InputMode::Browse => app.last_query.as_str(),
    };

    let items: Vec<ListItem> = view
        .iter()
        .map(|entry| ListItem::new(entry_line(entry, query, entry.index == *current)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Words ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Current entry
            Constraint::Length(3), // Position gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_current(f, app, chunks[0]);
    render_position(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_current(f: &mut Frame, app: &App, area: Rect) {
    let current = app.current();
    let space = Space::global();
    let length = space
        .length_of(&current.index)
        .unwrap_or(current.word.len());
    let position = &current.index - space.offset(length);

    let mut content = vec![
        Line::from(vec![
            Span::raw("Word:    "),
            Span::styled(
                current.word.text(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Bucket:  {length} symbols")),
        Line::from(format!("In bucket: {}", group_digits(&position))),
        Line::from(format!("Visited: {}", app.session.state().history().len())),
    ];
    if current.index == *SENTINEL_INDEX {
        content.push(Line::styled(
            "Redacted index",
            Style::default().fg(Color::Red),
        ));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Current ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_position(f: &mut Frame, app: &App, area: Rect) {
    let total = Space::global().total().to_f64().unwrap_or(f64::INFINITY);
    let ratio = app
        .current()
        .index
        .to_f64()
        .map_or(0.0, |index| (index / total).clamp(0.0, 1.0));

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Position ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(format!("{ratio:.3e}"));
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Browse => (
            " Press / to search | n/N repeat last search ",
            app.last_query.as_str(),
            Color::DarkGray,
        ),
        InputMode::Search => (
            " Search | Enter/↓ higher | ↑ lower | ESC to browse ",
            app.query.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Browse => "Mode: Browse",
        InputMode::Search => "Mode: Search",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let help = Paragraph::new("q: Quit | j/k: Step | PgUp/PgDn: Page | Home/End | r: Random")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchConfig;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn word_spans_split_on_match() {
        let spans = word_spans("xtestx", "test", Style::default());
        let texts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(texts, vec!["x", "test", "x"]);

        assert_eq!(word_spans("aaaa", "", Style::default()).len(), 1);
    }

    #[test]
    fn renders_visible_rows() {
        let mut app = App::new(&SearchConfig {
            seed: Some(1),
            ..SearchConfig::default()
        });
        app.set_rows(19);
        let screen = draw(&app);
        assert!(screen.contains("aaaa"));
        assert!(screen.contains("aaab"));
        assert!(screen.contains("Mode: Browse"));
    }
}
