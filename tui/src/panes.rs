//! HUD Panes
//!
//! Pure render functions, one per HUD region. Each consumes the
//! [`DisplayState`] and draws into a `Rect`; nothing here mutates state or
//! talks to the core.
//!
//! Layout, top to bottom: a fixed instrument row (clock, power, weather),
//! the feed pane taking the remaining space, then playback, the query input
//! bar, and a one-line status strip.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Gauge, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthChar;
use visor_core::{FeedMode, NotifyLevel};

use crate::display::DisplayState;
use crate::theme;

/// Height of the instrument row (clock, power, weather)
const INSTRUMENT_ROW_HEIGHT: u16 = 7;
/// Height of the playback pane
const PLAYBACK_HEIGHT: u16 = 4;
/// Height of the query input bar
const INPUT_HEIGHT: u16 = 3;

/// Render the full HUD frame
pub fn render(frame: &mut Frame, display: &DisplayState, input: &str, dev_mode: bool) {
    let [instruments, feed, playback, input_bar, status] = Layout::vertical([
        Constraint::Length(INSTRUMENT_ROW_HEIGHT),
        Constraint::Min(6),
        Constraint::Length(PLAYBACK_HEIGHT),
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let [clock, battery, weather] = Layout::horizontal([
        Constraint::Length(26),
        Constraint::Length(22),
        Constraint::Min(30),
    ])
    .areas(instruments);

    render_clock(frame, clock, display);
    render_battery(frame, battery, display);
    render_weather(frame, weather, display);
    render_feed(frame, feed, display);
    render_playback(frame, playback, display);
    render_input(frame, input_bar, input);
    render_status(frame, status, display, dev_mode);
}

/// Clock pane: time and date
pub fn render_clock(frame: &mut Frame, area: Rect, display: &DisplayState) {
    let lines = vec![
        Line::from(Span::styled(
            display.clock.time_line(),
            Style::default()
                .fg(theme::CLOCK)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            display.clock.date_line(),
            Style::default().fg(theme::HUD_TEAL_DIM),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(pane_block(" CLOCK ")), area);
}

/// Battery pane: charge bar and transport state
pub fn render_battery(frame: &mut Frame, area: Rect, display: &DisplayState) {
    let battery = display.battery;
    let color = if battery.is_low() {
        theme::BATTERY_LOW
    } else {
        theme::BATTERY_OK
    };

    let bar_width = area.width.saturating_sub(8) as usize;
    let filled = bar_width * usize::from(battery.level) / 100;
    let bar: String = "\u{2588}".repeat(filled) + &"\u{2591}".repeat(bar_width - filled);

    let state = if battery.charging { "CHARGING" } else { "ON CELL" };

    let lines = vec![
        Line::from(Span::styled(
            format!("{bar} {:>3}%", battery.level),
            Style::default().fg(color),
        )),
        Line::from(Span::styled(
            state,
            Style::default().fg(theme::HUD_TEAL_DIM),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(pane_block(" POWER ")), area);
}

/// Weather pane: location, temperature, condition
pub fn render_weather(frame: &mut Frame, area: Rect, display: &DisplayState) {
    let weather = &display.weather;

    let lines = vec![
        Line::from(Span::styled(
            weather.location.clone(),
            Style::default().fg(theme::HUD_TEAL_DIM),
        )),
        Line::from(Span::styled(
            weather.temperature.clone(),
            Style::default()
                .fg(theme::WEATHER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            weather.condition.clone(),
            Style::default().fg(theme::WEATHER),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(pane_block(" ATMOSPHERICS ")),
        area,
    );
}

/// Feed pane: headlines, pending query, or search result
pub fn render_feed(frame: &mut Frame, area: Rect, display: &DisplayState) {
    let mode = display.feed_mode();
    let title = format!(" {} ", mode.label());
    let inner_width = area.width.saturating_sub(2).max(1) as usize;

    let lines = match mode {
        FeedMode::Headlines => headline_lines(display),
        FeedMode::Querying => vec![
            Line::from(Span::styled(
                format!("SEARCHING: {}", display.search.query),
                Style::default().fg(theme::HUD_CYAN),
            )),
            Line::from(Span::styled(
                "stand by...",
                Style::default().fg(theme::DIM_GRAY),
            )),
        ],
        FeedMode::SearchResult => search_result_lines(display, inner_width),
    };

    frame.render_widget(Paragraph::new(lines).block(pane_block(&title)), area);
}

fn headline_lines(display: &DisplayState) -> Vec<Line<'static>> {
    if display.headlines.is_empty() {
        return vec![Line::from(Span::styled(
            "AWAITING UPLINK...",
            Style::default().fg(theme::DIM_GRAY),
        ))];
    }

    display
        .headlines
        .lines()
        .iter()
        .map(|headline| {
            Line::from(Span::styled(
                format!("> {headline}"),
                Style::default().fg(theme::FEED),
            ))
        })
        .collect()
}

fn search_result_lines(display: &DisplayState, width: usize) -> Vec<Line<'static>> {
    let text = display.search.result_text.as_deref().unwrap_or_default();

    let mut lines: Vec<Line<'static>> = textwrap::wrap(text, width)
        .into_iter()
        .map(|wrapped| {
            Line::from(Span::styled(
                wrapped.into_owned(),
                Style::default().fg(theme::HUD_CYAN),
            ))
        })
        .collect();

    if !display.search.citations.is_empty() {
        lines.push(Line::default());
        for (i, citation) in display.search.citations.iter().enumerate() {
            lines.push(Line::from(Span::styled(
                format!("[{}] {} <{}>", i + 1, citation.title, citation.uri),
                Style::default().fg(theme::CITATION),
            )));
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Esc to dismiss",
        Style::default().fg(theme::DIM_GRAY),
    )));

    lines
}

/// Playback pane: current track and synthetic progress
pub fn render_playback(frame: &mut Frame, area: Rect, display: &DisplayState) {
    let block = pane_block(" AUDIO ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 {
        return;
    }

    let [track_line, gauge_line] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);

    let playback = display.playback;
    let track = playback.current_track();
    let marker = if playback.playing { "\u{25b6}" } else { "||" };

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("{marker} {} - {} [{}]", track.title, track.artist, track.duration),
            Style::default().fg(theme::PLAYBACK),
        ))),
        track_line,
    );

    frame.render_widget(
        Gauge::default()
            .ratio(playback.progress_ratio())
            .label(format!("{:>2}%", playback.progress))
            .gauge_style(Style::default().fg(theme::PLAYBACK).bg(ratatui::style::Color::Black)),
        gauge_line,
    );
}

/// Query input bar
pub fn render_input(frame: &mut Frame, area: Rect, input: &str) {
    let border = if input.is_empty() {
        theme::BORDER
    } else {
        theme::BORDER_ACTIVE
    };

    let block = Block::bordered()
        .title(" QUERY ")
        .border_style(Style::default().fg(border));

    // Keep the cursor end of long input visible
    let budget = area.width.saturating_sub(5) as usize;
    let tail = visible_tail(input, budget);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("> {tail}_"),
            Style::default().fg(theme::QUERY_TEXT),
        )))
        .block(block),
        area,
    );
}

/// Status strip: lifecycle, key hints, and the current notification
pub fn render_status(frame: &mut Frame, area: Rect, display: &DisplayState, dev_mode: bool) {
    let mut spans = vec![Span::styled(
        format!(
            " {} | Tab rescan | ^P play | ^N skip | Esc clear | ^C quit",
            display.lifecycle.description()
        ),
        Style::default().fg(theme::DIM_GRAY),
    )];

    if let Some(ref notification) = display.notification {
        spans.push(Span::styled(
            format!("  {}", notification.message),
            Style::default().fg(notify_color(notification.level)),
        ));
    }

    if dev_mode {
        spans.push(Span::styled(
            format!("  [DEV {:?} {}x{}]", display.lifecycle, area.width, frame.area().height),
            Style::default().fg(theme::INFO),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn pane_block(title: &str) -> Block<'_> {
    Block::bordered()
        .title(title)
        .border_style(Style::default().fg(theme::BORDER))
        .title_style(Style::default().fg(theme::HUD_TEAL_DIM))
}

fn notify_color(level: NotifyLevel) -> ratatui::style::Color {
    match level {
        NotifyLevel::Info => theme::INFO,
        NotifyLevel::Warning => theme::WARNING,
        NotifyLevel::Error => theme::ERROR_RED,
        NotifyLevel::Success => theme::SUCCESS_GREEN,
    }
}

/// The longest suffix of `input` that fits in `max_width` terminal columns
fn visible_tail(input: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = input.len();
    for (idx, ch) in input.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        start = idx;
    }
    &input[start..]
}
