//! UniversalPath - path handling shared by the navigator and the view

use std::path::{Component, Path, PathBuf};

/// A path wrapper used everywhere a path crosses a crate boundary
///
/// - Normalized lexically on construction: made absolute, `.`/`..` folded.
///   Symlinks are never resolved, so a link keeps the name it was listed under.
/// - Lossy UTF-8 display string computed once for labels and preview decisions
/// - Long-path prefix on Windows, hidden again by `Display`
#[derive(Debug, Clone)]
pub struct UniversalPath {
    raw: PathBuf,

    display: String,
}

impl UniversalPath {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let raw = Self::normalize_path(path.as_ref());
        let display = raw.to_string_lossy().to_string();

        Self { raw, display }
    }

    /// Get the raw path for file system operations
    pub fn as_path(&self) -> &Path {
        &self.raw
    }

    pub fn parent(&self) -> Option<Self> {
        self.raw.parent().map(Self::new)
    }

    pub fn file_name(&self) -> Option<&str> {
        self.raw.file_name()?.to_str()
    }

    pub fn is_dir(&self) -> bool {
        self.raw.is_dir()
    }

    #[cfg(windows)]
    fn normalize_path(path: &Path) -> PathBuf {
        let normalized = lexical_absolute(path);

        let path_str = normalized.to_string_lossy();
        if !path_str.starts_with(r"\\?\") && !path_str.starts_with(r"\\.\") {
            PathBuf::from(format!(r"\\?\{}", path_str))
        } else {
            normalized
        }
    }

    #[cfg(not(windows))]
    fn normalize_path(path: &Path) -> PathBuf {
        lexical_absolute(path)
    }
}

/// Absolute path with `.` dropped and `..` popping the previous component
///
/// Purely textual: `..` after a symlinked directory goes back to where the
/// link lives, not to the parent of its target.
fn lexical_absolute(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().unwrap_or_default().join(path)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::ParentDir => {
                normalized.pop();
            }
            Component::CurDir => {}
            _ => normalized.push(component),
        }
    }
    normalized
}

impl PartialEq for UniversalPath {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for UniversalPath {}

impl std::hash::Hash for UniversalPath {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl AsRef<Path> for UniversalPath {
    fn as_ref(&self) -> &Path {
        &self.raw
    }
}

impl From<PathBuf> for UniversalPath {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for UniversalPath {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

impl From<String> for UniversalPath {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl From<&str> for UniversalPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl std::fmt::Display for UniversalPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let display = self.display.strip_prefix(r"\\?\").unwrap_or(&self.display);
        write!(f, "{}", display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_paths_compare_after_normalization() {
        let dir = tempfile::tempdir().unwrap();
        let direct = UniversalPath::new(dir.path());
        let dotted = UniversalPath::new(dir.path().join("."));
        assert_eq!(direct, dotted);
    }

    #[test]
    fn test_parent_and_file_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("photo.png"), b"x").unwrap();

        let file = UniversalPath::new(dir.path().join("photo.png"));
        assert_eq!(file.file_name(), Some("photo.png"));
        assert_eq!(file.parent(), Some(UniversalPath::new(dir.path())));
    }

    #[test]
    fn test_dot_dot_is_folded_textually() {
        let path = UniversalPath::new("/srv/browse/linkdir/../logo.png");
        assert_eq!(path, UniversalPath::new("/srv/browse/logo.png"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_keeps_its_own_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("store")).unwrap();
        std::fs::create_dir(dir.path().join("browse")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("store"), dir.path().join("browse").join("linkdir"))
            .unwrap();

        let link = UniversalPath::new(dir.path().join("browse").join("linkdir"));
        assert_eq!(link.file_name(), Some("linkdir"));
        assert!(link.is_dir());
        assert_eq!(link.parent(), Some(UniversalPath::new(dir.path().join("browse"))));
    }

    #[test]
    fn test_missing_path_keeps_spelling() {
        let path = UniversalPath::new("/definitely/not/here.txt");
        assert!(path.to_string().ends_with("here.txt"));
        assert!(!path.as_path().exists());
    }
}
