use super::*;
use crate::library::{Track, TrackId};
use crate::overflow::Measurement;
use crate::queue::{QueueStore, navigator};
use std::path::PathBuf;

fn t(id: usize, title: &str) -> Track {
    Track {
        id: TrackId(id),
        path: PathBuf::from(format!("/music/{title}.mp3")),
        title: title.into(),
        artist: None,
        album: None,
        duration: None,
        artwork: None,
        display: title.into(),
    }
}

fn app() -> App {
    App::new(vec![t(0, "Alpha"), t(1, "Beta"), t(2, "Gamma")])
}

#[test]
fn new_queues_every_track_without_activating() {
    let app = app();
    assert_eq!(app.queue.ids(), &[TrackId(0), TrackId(1), TrackId(2)]);
    assert!(app.active_track().is_none());
    assert_eq!(app.now_playing_text(), "");
}

#[test]
fn take_activation_reports_each_request_once() {
    let mut app = app();
    let mut app_none = App::new(Vec::new());
    assert!(app_none.take_activation().is_none());

    app.activate_first();
    assert_eq!(app.take_activation().map(|t| t.id), Some(TrackId(0)));
    assert!(app.take_activation().is_none());

    navigator::advance(&mut app.queue);
    assert_eq!(app.take_activation().map(|t| t.title.clone()), Some("Beta".to_string()));
    assert_eq!(app.selected, 1, "cursor follows the active track");
}

#[test]
fn activate_first_keeps_existing_activation() {
    let mut app = app();
    app.queue.set_active(TrackId(2));
    app.activate_first();
    assert_eq!(app.queue.active_id(), Some(TrackId(2)));
}

#[test]
fn cursor_wraps_and_activates_selection() {
    let mut app = app();
    app.select_prev();
    assert_eq!(app.selected, 2);
    app.select_next();
    assert_eq!(app.selected, 0);
    app.select_next();
    app.activate_selected();
    assert_eq!(app.queue.active_id(), Some(TrackId(1)));
}

#[test]
fn likes_follow_the_active_track() {
    let mut app = app();
    assert_eq!(app.toggle_like_active(), None);

    app.queue.set_active(TrackId(1));
    assert_eq!(app.toggle_like_active(), Some(true));
    assert!(app.is_active_liked());

    app.queue.set_active(TrackId(2));
    assert!(!app.is_active_liked());
}

#[test]
fn marquee_only_ticks_while_overflowing() {
    let mut app = app();
    app.queue.set_active(TrackId(0));

    app.check_overflow(&Measurement {
        content: 5,
        container: 20,
    });
    app.tick_marquee(4);
    assert_eq!(app.marquee.offset(), 0);

    app.check_overflow(&Measurement {
        content: 50,
        container: 20,
    });
    app.tick_marquee(4);
    app.tick_marquee(4);
    assert_eq!(app.marquee.offset(), 2);

    // Growing the container stops and rewinds the scroll.
    app.check_overflow(&Measurement {
        content: 50,
        container: 80,
    });
    assert_eq!(app.marquee.offset(), 0);
}

#[test]
fn track_lookup_rejects_unknown_ids() {
    let app = app();
    assert!(app.track(TrackId(7)).is_none());
    assert_eq!(app.track(TrackId(2)).map(|t| t.title.as_str()), Some("Gamma"));
}
