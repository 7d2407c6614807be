/// Normalizes a playlist reference down to the bare identifier.
///
/// Accepts either a bare id or a sharing URL such as
/// `https://open.spotify.com/playlist/ABC123?si=xyz` and strips any query
/// string, trailing slash and leading path segments.
pub fn normalize_playlist_id(input: &str) -> String {
    let bare = input
        .trim()
        .split('?')
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');
    bare.rsplit('/').next().unwrap_or(bare).to_string()
}

/// Returns the last path segment of a resource href, ignoring a trailing
/// slash. Recommendation results carry their track id only inside the href.
pub fn trailing_path_segment(href: &str) -> Option<String> {
    href.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}
