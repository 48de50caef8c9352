//! Screen and transport-bar geometry, shared by rendering and overflow
//! measurement so both agree on the now-playing container width.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Block;
use unicode_width::UnicodeWidthStr;

use crate::overflow::Measurement;

/// Columns taken by the artwork marker in front of the now-playing text.
pub const ARTWORK_MARKER_WIDTH: u16 = 2;

pub struct ScreenAreas {
    pub header: Rect,
    pub list: Rect,
    pub bar: Rect,
    pub footer: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);
    ScreenAreas {
        header: chunks[0],
        list: chunks[1],
        bar: chunks[2],
        footer: chunks[3],
    }
}

/// Cells of the transport bar. `volume` is `None` on narrow terminals.
pub struct BarAreas {
    pub info: Rect,
    pub controls: Rect,
    pub volume: Option<Rect>,
    pub narrow: bool,
}

/// Split the inside of the bar: three equal columns on wide terminals,
/// info 4/5 and controls 1/5 below `breakpoint`.
pub fn bar_layout(inner: Rect, terminal_width: u16, breakpoint: u16) -> BarAreas {
    let narrow = terminal_width < breakpoint;
    if narrow {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(4, 5), Constraint::Ratio(1, 5)])
            .split(inner);
        BarAreas {
            info: chunks[0],
            controls: chunks[1],
            volume: None,
            narrow,
        }
    } else {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(inner);
        BarAreas {
            info: chunks[0],
            controls: chunks[1],
            volume: Some(chunks[2]),
            narrow,
        }
    }
}

pub fn bar_block() -> Block<'static> {
    Block::bordered().title(" now playing ")
}

/// Width left for the now-playing text inside `info`.
pub fn text_width(info: Rect) -> usize {
    info.width.saturating_sub(ARTWORK_MARKER_WIDTH) as usize
}

/// Measure `text` against the now-playing slot of a terminal of size `area`.
pub fn measure_now_playing(area: Rect, text: &str, breakpoint: u16) -> Measurement {
    let screen = screen_layout(area);
    let inner = bar_block().inner(screen.bar);
    let bar = bar_layout(inner, area.width, breakpoint);
    Measurement {
        content: text.width(),
        container: text_width(bar.info),
    }
}
