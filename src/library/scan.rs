use std::path::{Path, PathBuf};
use std::time::Duration;

use lofty::prelude::*;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::display::display_from_fields;
use super::model::{Track, TrackId};

const ARTWORK_STEMS: [&str; 4] = ["cover", "folder", "front", "album"];
const ARTWORK_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

pub(super) fn normalized_extensions(settings: &LibrarySettings) -> Vec<String> {
    settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

pub(super) fn has_extension(path: &Path, exts: &[String]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| *e == ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Look for a cover image in the directory holding `track_path`.
pub(super) fn find_artwork(track_path: &Path) -> Option<PathBuf> {
    let dir = track_path.parent()?;
    ARTWORK_STEMS.iter().find_map(|stem| {
        ARTWORK_EXTENSIONS.iter().find_map(|ext| {
            [ext.to_string(), ext.to_ascii_uppercase()]
                .into_iter()
                .map(|e| dir.join(format!("{stem}.{e}")))
                .find(|candidate| candidate.is_file())
        })
    })
}

struct Tags {
    title: Option<String>,
    artist: Option<String>,
    album: Option<String>,
    duration: Option<Duration>,
}

fn read_tags(path: &Path) -> Tags {
    let mut tags = Tags {
        title: None,
        artist: None,
        album: None,
        duration: None,
    };

    let tagged = match lofty::read_from_path(path) {
        Ok(t) => t,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no readable tags");
            return tags;
        }
    };

    tags.duration = Some(tagged.properties().duration());
    if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
        let clean = |v: Option<std::borrow::Cow<'_, str>>| {
            v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
        };
        tags.title = clean(tag.title());
        tags.artist = clean(tag.artist());
        tags.album = clean(tag.album());
    }
    tags
}

/// Scan `dir` for audio files and return them sorted by display label, with
/// ids assigned in that order.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<Track> {
    let exts = normalized_extensions(settings);
    let mut tracks: Vec<Track> = Vec::new();

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if !path.is_file() || !has_extension(path, &exts) {
            continue;
        }

        let tags = read_tags(path);
        let title = tags.title.unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("UNKNOWN")
                .to_string()
        });
        let display = display_from_fields(
            path,
            &title,
            tags.artist.as_deref(),
            tags.album.as_deref(),
            &settings.display_fields,
            &settings.display_separator,
        );

        tracks.push(Track {
            id: TrackId(0),
            path: path.to_path_buf(),
            title,
            artist: tags.artist,
            album: tags.album,
            duration: tags.duration,
            artwork: find_artwork(path),
            display,
        });
    }

    tracks.sort_by_key(|t| t.display.to_lowercase());
    for (i, track) in tracks.iter_mut().enumerate() {
        track.id = TrackId(i);
    }

    info!(dir = %dir.display(), count = tracks.len(), "library scanned");
    tracks
}
