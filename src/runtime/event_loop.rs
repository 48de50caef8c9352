use std::io::Stdout;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::debug;

use crate::app::App;
use crate::audio::{AudioEngine, EngineEvent};
use crate::config;
use crate::error::Result;
use crate::queue::navigator;
use crate::runtime::startup::apply_activation;
use crate::transport::Transport;
use crate::ui::{self, TransportView};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Main terminal event loop: drains engine events, applies queue activations,
/// scrolls the marquee, draws, and handles input. Returns `Ok(())` when the
/// user quits.
pub fn run<E: AudioEngine>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    transport: &mut Transport<E>,
    events: &Receiver<EngineEvent>,
) -> Result<()> {
    let tick = Duration::from_millis(settings.ui.marquee_tick_ms);
    let mut last_tick = Instant::now();
    remeasure(app, screen_area()?, &settings.ui);

    loop {
        while let Ok(ev) = events.try_recv() {
            debug!(handle = ev.handle, kind = ?ev.kind, "engine event");
            transport.handle_event(ev, &mut app.queue);
        }

        if apply_activation(app, transport) {
            remeasure(app, screen_area()?, &settings.ui);
        }

        if last_tick.elapsed() >= tick {
            app.tick_marquee(settings.ui.marquee_gap);
            last_tick = Instant::now();
        }

        let view = transport_view(transport);
        terminal.draw(|f| ui::draw(f, app, view, &settings.ui))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key_event(key, settings, app, transport) {
                        return Ok(());
                    }
                }
                Event::Resize(width, height) => {
                    remeasure(app, Rect::new(0, 0, width, height), &settings.ui);
                }
                _ => {}
            }
        }
    }
}

fn screen_area() -> Result<Rect> {
    let (width, height) = crossterm::terminal::size()?;
    Ok(Rect::new(0, 0, width, height))
}

/// Re-run overflow detection for the current now-playing text.
pub(super) fn remeasure(app: &mut App, area: Rect, ui: &config::UiSettings) {
    let m = ui::measure_now_playing(area, &app.now_playing_text(), ui.narrow_breakpoint);
    app.check_overflow(&m);
}

pub(super) fn transport_view<E: AudioEngine>(transport: &Transport<E>) -> TransportView {
    TransportView {
        state: transport.state(),
        volume: transport.volume(),
        looping: transport.is_looping(),
    }
}

/// Apply one key press. Returns `true` when the user asked to quit.
pub(super) fn handle_key_event<E: AudioEngine>(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    transport: &mut Transport<E>,
) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    let step = settings.controls.volume_step;
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char(' ') | KeyCode::Char('p') => transport.toggle_playback(),
        KeyCode::Char('l') | KeyCode::Right => navigator::advance(&mut app.queue),
        KeyCode::Char('h') | KeyCode::Left => navigator::retreat(&mut app.queue),
        KeyCode::Char('r') => transport.toggle_loop(),
        KeyCode::Char('m') => transport.toggle_mute(),
        KeyCode::Char('+') | KeyCode::Char('=') => transport.nudge_volume(step),
        KeyCode::Char('-') => transport.nudge_volume(-step),
        KeyCode::Char('f') => {
            app.toggle_like_active();
        }
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Enter => app.activate_selected(),
        _ => {}
    }
    false
}
