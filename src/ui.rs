//! Rendering of the queue list and the transport bar with `ratatui`.

mod layout;

pub use layout::measure_now_playing;

use std::{collections::BTreeMap, sync::LazyLock};

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::config::UiSettings;
use crate::queue::QueueStore;
use crate::transport::PlaybackState;

use layout::{BarAreas, bar_block, bar_layout, screen_layout, text_width};

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    BTreeMap::from([
        ("space/p", "play/pause"),
        ("h/l", "prev/next"),
        ("r", "loop"),
        ("m", "mute"),
        ("-/+", "volume"),
        ("f", "like"),
        ("j/k", "up/down"),
        ("enter", "play selected"),
        ("q", "quit"),
    ])
});

fn controls_text() -> String {
    let order = ["space/p", "h/l", "r", "m", "-/+", "f", "j/k", "enter", "q"];
    order
        .iter()
        .filter_map(|k| CONTROLS_MAP.get(k).map(|v| format!("[{k}] {v}")))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Transport state the bar needs, detached from the engine type.
#[derive(Debug, Copy, Clone)]
pub struct TransportView {
    pub state: PlaybackState,
    pub volume: f32,
    pub looping: bool,
}

pub fn draw(frame: &mut Frame, app: &App, transport: TransportView, ui: &UiSettings) {
    let area = frame.area();
    let screen = screen_layout(area);

    let mut header_text = ui.header_text.clone();
    if let Some(dir) = &app.current_dir {
        header_text.push_str(&format!("• {dir} "));
    }
    let header = Paragraph::new(header_text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" nowbar ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, screen.header);

    draw_queue(frame, app, screen.list);

    let block = bar_block();
    let inner = block.inner(screen.bar);
    frame.render_widget(block, screen.bar);
    let bar = bar_layout(inner, area.width, ui.narrow_breakpoint);
    draw_bar(frame, app, transport, ui, &bar);

    let footer = Paragraph::new(controls_text())
        .block(
            Block::bordered()
                .title(" controls ")
                .padding(Padding::left(1)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, screen.footer);
}

fn draw_queue(frame: &mut Frame, app: &App, area: Rect) {
    let ids = app.queue.ids();
    let active = app.queue.active_id();

    // Only build items for the rows that fit, keeping the cursor centered.
    let total = ids.len();
    let height = area.height.saturating_sub(2) as usize;
    let (start, end) = if total <= height || height == 0 {
        (0, total)
    } else {
        let half = height / 2;
        let start = app.selected.saturating_sub(half).min(total - height);
        (start, start + height)
    };

    let items: Vec<ListItem> = ids[start..end]
        .iter()
        .map(|&id| {
            let label = app
                .track(id)
                .map(|t| t.display.as_str())
                .unwrap_or("<missing>");
            if Some(id) == active {
                ListItem::new(Line::from(vec![Span::raw("♪ "), Span::raw(label)]))
                    .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            } else {
                ListItem::new(Line::from(vec![Span::raw("  "), Span::raw(label)]))
            }
        })
        .collect();

    let list = List::new(items)
        .block(Block::bordered().title(" queue "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if total > 0 {
        state.select(Some(app.selected.saturating_sub(start)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_bar(frame: &mut Frame, app: &App, transport: TransportView, ui: &UiSettings, bar: &BarAreas) {
    // Track info: artwork marker, then title/artist, scrolled when it overflows.
    let text = app.now_playing_text();
    let width = text_width(bar.info);
    let shown = if app.overflow.is_overflowing() {
        app.marquee.window(&text, ui.marquee_gap, width)
    } else {
        text
    };
    let marker = match app.active_track() {
        Some(t) if t.artwork.is_some() => "▣ ",
        Some(_) => "♪ ",
        None => "  ",
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![Span::raw(marker).dim(), Span::raw(shown)])),
        bar.info,
    );

    let like = if app.is_active_liked() {
        Span::styled("♥", Style::default().fg(Color::Green))
    } else {
        Span::raw("♡")
    };
    let play = match transport.state {
        PlaybackState::Playing => "⏸",
        PlaybackState::Idle | PlaybackState::Paused => "▶",
    };
    let mut controls = vec![like, Span::raw("  ")];
    if !bar.narrow {
        controls.push(Span::raw("⏮").dark_gray());
        controls.push(Span::raw("  "));
    }
    controls.push(Span::raw(play).bold());
    if !bar.narrow {
        controls.push(Span::raw("  "));
        controls.push(Span::raw("⏭").dark_gray());
        controls.push(Span::raw("  "));
        controls.push(if transport.looping {
            Span::styled("⟳1", Style::default().fg(Color::Green))
        } else {
            Span::raw("⟳").dark_gray()
        });
    }
    let alignment = if bar.narrow {
        Alignment::Right
    } else {
        Alignment::Center
    };
    frame.render_widget(
        Paragraph::new(Line::from(controls)).alignment(alignment),
        bar.controls,
    );

    if let Some(volume_area) = bar.volume {
        let icon = if transport.volume == 0.0 { "🔇" } else { "🔈" };
        let gauge = LineGauge::default()
            .label(icon)
            .ratio(f64::from(transport.volume.clamp(0.0, 1.0)))
            .filled_style(Style::default().fg(Color::White))
            .unfilled_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(gauge, volume_area);
    }
}

#[cfg(test)]
mod tests;
