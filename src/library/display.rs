use std::path::Path;

use crate::config::TrackDisplayField;

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// Compose the list label of a track from the configured `fields`, joined by
/// `sep`. Falls back to `title` when every field is empty.
pub fn display_from_fields(
    path: &Path,
    title: &str,
    artist: Option<&str>,
    album: Option<&str>,
    fields: &[TrackDisplayField],
    sep: &str,
) -> String {
    let stem = path.file_stem().and_then(|s| s.to_str());

    let parts: Vec<String> = fields
        .iter()
        .flat_map(|field| -> Vec<String> {
            match field {
                TrackDisplayField::Title => non_blank(Some(title)).map(str::to_string).into_iter().collect(),
                TrackDisplayField::Artist => non_blank(artist).map(str::to_string).into_iter().collect(),
                TrackDisplayField::Album => non_blank(album).map(str::to_string).into_iter().collect(),
                TrackDisplayField::Filename => non_blank(stem).map(str::to_string).into_iter().collect(),
                TrackDisplayField::Path => vec![path.display().to_string()],
            }
        })
        .collect();

    if parts.is_empty() {
        title.to_string()
    } else {
        parts.join(sep)
    }
}
