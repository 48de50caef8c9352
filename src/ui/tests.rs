use super::*;
use crate::library::{Track, TrackId};
use crate::overflow::MeasurementProvider;
use ratatui::{Terminal, backend::TestBackend};
use std::path::PathBuf;

fn app_with(title: &str) -> App {
    let mut app = App::new(vec![Track {
        id: TrackId(0),
        path: PathBuf::from("/music/song.mp3"),
        title: title.into(),
        artist: Some("Artist".into()),
        album: None,
        duration: None,
        artwork: None,
        display: format!("Artist - {title}"),
    }]);
    app.activate_first();
    app.take_activation();
    app
}

fn view(state: PlaybackState, volume: f32, looping: bool) -> TransportView {
    TransportView {
        state,
        volume,
        looping,
    }
}

const HEIGHT: u16 = 16;
/// Inner row of the transport bar: header (3) + queue (7) + top border.
const BAR_ROW: usize = 11;

fn render_rows(width: u16, app: &App, transport: TransportView) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, HEIGHT)).unwrap();
    terminal
        .draw(|f| draw(f, app, transport, &UiSettings::default()))
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .chunks(width as usize)
        .map(|row| row.iter().map(|c| c.symbol()).collect())
        .collect()
}

fn render(width: u16, app: &App, transport: TransportView) -> String {
    render_rows(width, app, transport).concat()
}

#[test]
fn wide_layout_shows_every_control() {
    let app = app_with("Song");
    let out = render(120, &app, view(PlaybackState::Playing, 1.0, true));
    for glyph in ["♡", "⏮", "⏸", "⏭", "⟳1", "Song · Artist"] {
        assert!(out.contains(glyph), "missing {glyph}");
    }
}

#[test]
fn narrow_layout_hides_secondary_controls() {
    let app = app_with("Song");
    let out = render(60, &app, view(PlaybackState::Paused, 1.0, false));
    assert!(out.contains("▶"));
    assert!(out.contains("♡"));
    for glyph in ["⏮", "⏭", "⟳"] {
        assert!(!out.contains(glyph), "{glyph} should be hidden");
    }
}

#[test]
fn bar_layout_switches_at_breakpoint() {
    let inner = Rect::new(0, 0, 90, 1);
    assert!(bar_layout(inner, 79, 80).narrow);
    assert!(bar_layout(inner, 79, 80).volume.is_none());
    let wide = bar_layout(inner, 80, 80);
    assert!(!wide.narrow);
    assert!(wide.volume.is_some());
}

#[test]
fn measurement_follows_terminal_width() {
    let text = "x".repeat(40);
    let wide = measure_now_playing(Rect::new(0, 0, 200, 20), &text, 80);
    assert_eq!(wide.content_width(), 40);
    assert!(wide.container_width() > 40);

    let small = measure_now_playing(Rect::new(0, 0, 90, 20), &text, 80);
    assert!(small.container_width() < 40);
}

#[test]
fn overflowing_title_is_windowed_to_the_slot() {
    let long = "An Extremely Long Song Title That Cannot Possibly Fit";
    let mut app = app_with(long);
    let area = Rect::new(0, 0, 90, 16);
    let m = measure_now_playing(area, &app.now_playing_text(), 80);
    assert!(app.check_overflow(&m));
    app.tick_marquee(4);

    let rows = render_rows(90, &app, view(PlaybackState::Playing, 0.5, false));
    let bar = &rows[BAR_ROW];
    // One step in: the leading "A" scrolled out.
    assert!(bar.contains("♪ n Extremely"), "bar row was {bar:?}");
    assert!(!bar.contains("Cannot Possibly Fit"));
}

#[test]
fn double_width_title_overflows_by_columns() {
    use unicode_width::UnicodeWidthStr;

    let title = "日本語のタイトル日本語のタイトル日本語";
    let mut app = app_with(title);
    let area = Rect::new(0, 0, 80, 24);
    let text = app.now_playing_text();
    let m = measure_now_playing(area, &text, 80);
    assert_eq!(m.content_width(), text.width());
    assert!(title.chars().count() < m.container_width());
    assert!(app.check_overflow(&m), "{} columns in a {} column slot", m.content_width(), m.container_width());

    app.tick_marquee(4);
    let shown = app.marquee.window(&text, 4, m.container_width());
    assert_eq!(shown.width(), m.container_width());

    let rows = render_rows(80, &app, view(PlaybackState::Playing, 0.5, false));
    let bar = &rows[BAR_ROW];
    assert!(bar.contains("本"), "bar row was {bar:?}");
    assert!(bar.contains("⏸"), "controls survive next to the scrolled title: {bar:?}");
}
