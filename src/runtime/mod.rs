use std::env;
use std::path::Path;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::audio::RodioEngine;
use crate::error::Result;
use crate::library::scan;
use crate::transport::Transport;

mod event_loop;
mod logging;
mod settings;
mod startup;

pub fn run() -> Result<()> {
    let (settings, config_problem) = settings::load_settings();
    let log_path = logging::init(&settings.log);
    if let Some(err) = config_problem {
        warn!(error = %err, "configuration rejected, using defaults");
    }
    info!(log = ?log_path, "nowbar starting");

    let dir = env::args().nth(1).unwrap_or_else(|| {
        env::current_dir()
            .ok()
            .and_then(|p| p.to_str().map(|s| s.to_string()))
            .unwrap_or_else(|| ".".to_string())
    });

    let tracks = scan(Path::new(&dir), &settings.library);
    let mut app = App::new(tracks);
    app.set_current_dir(dir);
    if !app.has_tracks() {
        warn!("no playable tracks found");
    }

    let (engine, events) = RodioEngine::start()?;
    let mut transport = Transport::new(
        engine,
        settings.audio.initial_volume,
        settings.playback.looping,
        settings.audio.formats.clone(),
    );

    startup::start_playback(&mut app, &mut transport);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &mut transport, &events);

    if let Some(path) = transport.current_path() {
        info!(path = %path.display(), "stopping playback");
    }
    transport
        .engine_mut()
        .shutdown(Duration::from_millis(settings.audio.quit_fade_out_ms));
    drop(transport);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
