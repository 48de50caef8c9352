use super::*;
use crate::audio::HandleId;
use crate::audio::fake::{Call, CallLog as Log, FakeEngine};
use crate::library::TrackId;
use crate::queue::PlayerQueue;

fn transport() -> (Transport<FakeEngine>, Log) {
    let engine = FakeEngine::default();
    let log = engine.log.clone();
    (Transport::new(engine, 1.0, false, vec!["mp3".into()]), log)
}

fn event(handle: HandleId, kind: EngineEventKind) -> EngineEvent {
    EngineEvent { handle, kind }
}

fn calls(log: &Log) -> Vec<Call> {
    log.borrow().clone()
}

#[test]
fn load_acquires_and_autoplays_without_assuming_state() {
    let (mut t, log) = transport();
    t.load(Path::new("/m/a.mp3"));

    assert_eq!(
        calls(&log),
        vec![
            Call::Load(
                1,
                PathBuf::from("/m/a.mp3"),
                SoundOptions {
                    volume: 1.0,
                    looping: false,
                    formats: vec!["mp3".into()],
                }
            ),
            Call::Play(1),
        ]
    );
    assert_eq!(t.state(), PlaybackState::Idle);

    let mut q = PlayerQueue::default();
    t.handle_event(event(1, EngineEventKind::Play), &mut q);
    assert!(t.is_playing());
}

#[test]
fn one_acquire_release_pair_per_distinct_path() {
    let (mut t, log) = transport();
    t.load(Path::new("/m/a.mp3"));
    t.load(Path::new("/m/a.mp3"));
    t.load(Path::new("/m/b.mp3"));
    drop(t);

    let lifecycle: Vec<String> = calls(&log)
        .into_iter()
        .filter_map(|c| match c {
            Call::Load(id, path, _) => Some(format!("load {id} {}", path.display())),
            Call::Unload(id) => Some(format!("unload {id}")),
            _ => None,
        })
        .collect();
    assert_eq!(
        lifecycle,
        vec!["load 1 /m/a.mp3", "unload 1", "load 2 /m/b.mp3", "unload 2"]
    );
}

#[test]
fn release_on_drop_mid_playback() {
    let (mut t, log) = transport();
    let mut q = PlayerQueue::default();
    t.load(Path::new("/m/a.mp3"));
    t.handle_event(event(1, EngineEventKind::Play), &mut q);
    drop(t);
    assert_eq!(calls(&log).last(), Some(&Call::Unload(1)));
}

#[test]
fn toggle_playback_follows_acknowledged_state() {
    let (mut t, log) = transport();
    let mut q = PlayerQueue::default();
    t.load(Path::new("/m/a.mp3"));
    log.borrow_mut().clear();

    // Not yet acknowledged: toggling asks to play again.
    t.toggle_playback();
    assert_eq!(calls(&log), vec![Call::Play(1)]);
    assert_eq!(t.state(), PlaybackState::Idle);

    t.handle_event(event(1, EngineEventKind::Play), &mut q);
    t.toggle_playback();
    assert_eq!(calls(&log).last(), Some(&Call::Pause(1)));
    assert!(t.is_playing(), "pause is not assumed until acknowledged");

    t.handle_event(event(1, EngineEventKind::Pause), &mut q);
    assert_eq!(t.state(), PlaybackState::Paused);
    t.toggle_playback();
    assert_eq!(calls(&log).last(), Some(&Call::Play(1)));
}

#[test]
fn toggle_playback_without_handle_is_noop() {
    let (t, log) = transport();
    t.toggle_playback();
    assert!(calls(&log).is_empty());
}

#[test]
fn stale_events_are_ignored() {
    let (mut t, _log) = transport();
    let mut q = PlayerQueue::new(vec![TrackId(0), TrackId(1)]);
    t.load(Path::new("/m/a.mp3"));
    t.load(Path::new("/m/b.mp3"));

    t.handle_event(event(1, EngineEventKind::Play), &mut q);
    assert_eq!(t.state(), PlaybackState::Idle);

    t.handle_event(event(1, EngineEventKind::End), &mut q);
    assert_eq!(q.active_id(), None, "stale end must not advance");
}

#[test]
fn toggle_mute_is_binary() {
    let (mut t, _log) = transport();
    assert_eq!(t.volume(), 1.0);
    t.toggle_mute();
    assert_eq!(t.volume(), 0.0);
    assert!(t.is_muted());
    t.toggle_mute();
    assert_eq!(t.volume(), 1.0);

    // Partial volumes are not remembered.
    t.set_volume(0.4);
    t.toggle_mute();
    t.toggle_mute();
    assert_eq!(t.volume(), 1.0);
}

#[test]
fn volume_changes_reach_the_live_handle_and_are_clamped() {
    let (mut t, log) = transport();
    t.set_volume(0.5);
    t.load(Path::new("/m/a.mp3"));
    assert!(matches!(&calls(&log)[0], Call::Load(_, _, o) if o.volume == 0.5));

    t.set_volume(2.0);
    assert_eq!(calls(&log).last(), Some(&Call::SetVolume(1, 1.0)));
    t.nudge_volume(-1.5);
    assert_eq!(t.volume(), 0.0);
    assert_eq!(calls(&log).last(), Some(&Call::SetVolume(1, 0.0)));
}

#[test]
fn toggle_loop_mirrors_flag_on_handle() {
    let (mut t, log) = transport();
    t.toggle_loop();
    assert!(t.is_looping());
    // No handle yet: nothing to propagate, but the next load picks it up.
    assert!(calls(&log).is_empty());

    t.load(Path::new("/m/a.mp3"));
    assert!(matches!(&calls(&log)[0], Call::Load(_, _, o) if o.looping));

    t.toggle_loop();
    assert_eq!(calls(&log).last(), Some(&Call::SetLoop(1, false)));
    t.toggle_loop();
    assert_eq!(calls(&log).last(), Some(&Call::SetLoop(1, true)));
    assert!(t.is_looping());
}

#[test]
fn end_while_looping_replays_without_advancing() {
    let (mut t, log) = transport();
    let mut q = PlayerQueue::new(vec![TrackId(0), TrackId(1)]);
    q.set_active(TrackId(0));
    t.toggle_loop();
    t.load(Path::new("/m/a.mp3"));
    t.handle_event(event(1, EngineEventKind::Play), &mut q);
    log.borrow_mut().clear();

    t.handle_event(event(1, EngineEventKind::End), &mut q);
    assert!(!t.is_playing());
    assert_eq!(calls(&log), vec![Call::Play(1)]);
    assert_eq!(q.active_id(), Some(TrackId(0)));
}

#[test]
fn end_on_last_entry_wraps_to_first() {
    let (mut t, _log) = transport();
    let mut q = PlayerQueue::new(vec![TrackId(0), TrackId(1), TrackId(2)]);
    q.set_active(TrackId(2));
    t.load(Path::new("/m/c.mp3"));
    t.handle_event(event(1, EngineEventKind::Play), &mut q);

    t.handle_event(event(1, EngineEventKind::End), &mut q);
    assert_eq!(t.state(), PlaybackState::Idle);
    assert_eq!(q.active_id(), Some(TrackId(0)));
}

#[test]
fn load_error_leaves_idle() {
    let (mut t, _log) = transport();
    let mut q = PlayerQueue::default();
    t.load(Path::new("/m/broken.mp3"));
    t.handle_event(event(1, EngineEventKind::LoadError("bad header".into())), &mut q);
    assert_eq!(t.state(), PlaybackState::Idle);
    assert_eq!(t.current_path(), Some(Path::new("/m/broken.mp3")));
}
