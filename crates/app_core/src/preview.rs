//! Preview pane policy

use app_fs::{FileSystem, UniversalPath};

/// Suffixes the preview pane shows, compared literally against the text from
/// the last `.` of the path. "swf" and "svg" carry no dot and are kept as is.
pub const PREVIEW_EXTENSIONS: [&str; 9] = [
    ".gif", ".jpeg", ".jpg", ".png", ".bmp", ".ico", ".cur", "swf", "svg",
];

/// What the preview pane currently shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewState {
    pub visible: bool,
    pub source: Option<UniversalPath>,
    /// Take all space left in the pane
    pub expand: bool,
}

/// Decision for one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewDecision {
    /// Hide and drop the source
    Clear,
    /// Show `source`, filling the pane
    Show(UniversalPath),
    /// Hide, keeping whatever source was set before
    Hide,
}

impl PreviewDecision {
    pub fn apply(self, previous: &PreviewState) -> PreviewState {
        match self {
            PreviewDecision::Clear => PreviewState::default(),
            PreviewDecision::Show(source) => PreviewState {
                visible: true,
                source: Some(source),
                expand: true,
            },
            PreviewDecision::Hide => PreviewState {
                visible: false,
                ..previous.clone()
            },
        }
    }
}

/// Text from the last `.` of `path` (inclusive), or "" when there is none
pub fn extension_of(path: &str) -> &str {
    path.rfind('.').map(|idx| &path[idx..]).unwrap_or("")
}

pub fn decide(selected: Option<&UniversalPath>, fs: &dyn FileSystem, limit: u64) -> PreviewDecision {
    let Some(selected) = selected else {
        return PreviewDecision::Clear;
    };
    let pathname = selected.to_string();
    if pathname.is_empty() {
        return PreviewDecision::Clear;
    }

    let extension = extension_of(&pathname);

    match fs.byte_length(selected) {
        Ok(len) if len > limit => return PreviewDecision::Clear,
        Ok(_) => {}
        Err(e) => {
            tracing::debug!("No preview for {}: {}", pathname, e);
            return PreviewDecision::Clear;
        }
    }

    if PREVIEW_EXTENSIONS.contains(&extension) {
        PreviewDecision::Show(selected.clone())
    } else {
        PreviewDecision::Hide
    }
}
