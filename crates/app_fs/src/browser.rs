//! Directory listing - one level, with the metadata the table shows

use crate::{FsError, Result, UniversalPath};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Icon shown next to a listing row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryIcon {
    Folder,
    Image,
    File,
}

impl EntryIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            EntryIcon::Folder => "📁",
            EntryIcon::Image => "🖼",
            EntryIcon::File => "📄",
        }
    }
}

/// File entry with metadata
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub path: UniversalPath,
    pub name: String,
    pub is_dir: bool,
    pub is_hidden: bool,
    pub size: u64,
    /// Seconds since the Unix epoch
    pub modified: Option<i64>,
    /// Lowercased, without the dot
    pub extension: String,
}

impl FileEntry {
    /// Entry for `path`, following a symlink when its target exists
    ///
    /// A dangling link is described by the link itself.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let metadata = fs::metadata(path)
            .or_else(|_| fs::symlink_metadata(path))
            .map_err(|e| FsError::from_io(e, path))?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let modified = metadata
            .modified()
            .ok()
            .and_then(|t| t.duration_since(std::time::UNIX_EPOCH).ok())
            .map(|d| d.as_secs() as i64);

        let is_hidden = is_hidden_file(path, &name);

        Ok(Self {
            path: UniversalPath::new(path),
            name,
            is_dir: metadata.is_dir(),
            is_hidden,
            size: metadata.len(),
            modified,
            extension,
        })
    }

    /// Row for a child whose metadata cannot be read at all
    fn unreadable(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Self {
            path: UniversalPath::new(path),
            is_hidden: is_hidden_file(path, &name),
            extension: path
                .extension()
                .map(|e| e.to_string_lossy().to_lowercase())
                .unwrap_or_default(),
            name,
            is_dir: false,
            size: 0,
            modified: None,
        }
    }

    pub fn icon(&self) -> EntryIcon {
        if self.is_dir {
            EntryIcon::Folder
        } else if self.is_image() {
            EntryIcon::Image
        } else {
            EntryIcon::File
        }
    }

    /// Icon hint only: any case matches, unlike the preview rule
    pub fn is_image(&self) -> bool {
        matches!(
            self.extension.as_str(),
            "jpg" | "jpeg" | "png" | "gif" | "bmp" | "ico" | "cur" | "svg"
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortBy {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "size")]
    Size,
    #[serde(rename = "modified")]
    Modified,
    #[serde(rename = "type")]
    Extension,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

/// Options for listing directory contents
#[derive(Debug, Clone)]
pub struct ListOptions {
    pub show_hidden: bool,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            show_hidden: true,
            sort_by: SortBy::Name,
            sort_order: SortOrder::Ascending,
        }
    }
}

/// List the immediate children of `path`
///
/// Every child is listed. Children whose metadata cannot be read get a
/// row with size 0 and no modification time.
pub fn list_directory<P: AsRef<Path>>(path: P, options: &ListOptions) -> Result<Vec<FileEntry>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(FsError::NotFound(path.display().to_string()));
    }

    if !path.is_dir() {
        return Err(FsError::NotADirectory(path.display().to_string()));
    }

    let mut entries = Vec::new();

    for entry in fs::read_dir(path).map_err(|e| FsError::from_io(e, path))? {
        let entry = entry.map_err(|e| FsError::from_io(e, path))?;
        let child = entry.path();
        let file_entry = match FileEntry::from_path(&child) {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!("No metadata for {:?}: {}", child, e);
                FileEntry::unreadable(&child)
            }
        };

        if !options.show_hidden && file_entry.is_hidden {
            continue;
        }

        entries.push(file_entry);
    }

    sort_entries(&mut entries, options.sort_by, options.sort_order);

    Ok(entries)
}

fn sort_entries(entries: &mut [FileEntry], sort_by: SortBy, order: SortOrder) {
    entries.sort_by(|a, b| {
        // Directories always come first
        if a.is_dir != b.is_dir {
            return if a.is_dir {
                std::cmp::Ordering::Less
            } else {
                std::cmp::Ordering::Greater
            };
        }

        let cmp = match sort_by {
            SortBy::Name => natural_sort_key(&a.name).cmp(&natural_sort_key(&b.name)),
            SortBy::Size => a.size.cmp(&b.size),
            SortBy::Modified => a.modified.cmp(&b.modified),
            SortBy::Extension => a
                .extension
                .cmp(&b.extension)
                .then_with(|| natural_sort_key(&a.name).cmp(&natural_sort_key(&b.name))),
        };

        match order {
            SortOrder::Ascending => cmp,
            SortOrder::Descending => cmp.reverse(),
        }
    });
}

/// "image2.jpg" < "image10.jpg"
fn natural_sort_key(s: &str) -> Vec<NaturalSortPart> {
    let mut parts = Vec::new();
    let mut current_num = String::new();
    let mut current_str = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            if !current_str.is_empty() {
                parts.push(NaturalSortPart::Str(current_str.to_lowercase()));
                current_str.clear();
            }
            current_num.push(c);
        } else {
            if !current_num.is_empty() {
                if let Ok(n) = current_num.parse::<u64>() {
                    parts.push(NaturalSortPart::Num(n));
                }
                current_num.clear();
            }
            current_str.push(c);
        }
    }

    if !current_num.is_empty() {
        if let Ok(n) = current_num.parse::<u64>() {
            parts.push(NaturalSortPart::Num(n));
        }
    }
    if !current_str.is_empty() {
        parts.push(NaturalSortPart::Str(current_str.to_lowercase()));
    }

    parts
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum NaturalSortPart {
    Num(u64),
    Str(String),
}

#[cfg(windows)]
fn is_hidden_file(path: &Path, _name: &str) -> bool {
    use std::os::windows::fs::MetadataExt;

    const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;

    fs::metadata(path)
        .map(|m| m.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0)
        .unwrap_or(false)
}

#[cfg(not(windows))]
fn is_hidden_file(_path: &Path, name: &str) -> bool {
    name.starts_with('.')
}

/// Check if path is a root/drive
pub fn is_root<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();

    #[cfg(windows)]
    {
        let s = path.to_string_lossy();
        let s = s.strip_prefix(r"\\?\").unwrap_or(&s);
        s.len() <= 3 && s.ends_with('\\')
    }

    #[cfg(not(windows))]
    {
        path.parent().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[FileEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_natural_sort() {
        let mut names = vec!["image10.jpg", "image2.jpg", "image1.jpg", "image20.jpg"];
        names.sort_by(|a, b| natural_sort_key(a).cmp(&natural_sort_key(b)));
        assert_eq!(names, vec!["image1.jpg", "image2.jpg", "image10.jpg", "image20.jpg"]);
    }

    #[test]
    fn test_listing_is_not_recursive() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("subdir")).unwrap();
        fs::write(dir.path().join("subdir").join("nested.txt"), b"nested").unwrap();
        fs::write(dir.path().join("b.txt"), b"bb").unwrap();
        fs::write(dir.path().join("a.png"), b"a").unwrap();

        let entries = list_directory(dir.path(), &ListOptions::default()).unwrap();
        assert_eq!(names(&entries), vec!["subdir", "a.png", "b.txt"]);
        assert_eq!(entries[0].icon(), EntryIcon::Folder);
        assert_eq!(entries[1].icon(), EntryIcon::Image);
        assert_eq!(entries[2].size, 2);
        assert!(entries[2].modified.is_some());
    }

    #[test]
    fn test_hidden_filter_and_descending_size() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".hidden"), b"h").unwrap();
        fs::write(dir.path().join("small"), b"1").unwrap();
        fs::write(dir.path().join("large"), b"1234").unwrap();

        let options = ListOptions {
            show_hidden: false,
            sort_by: SortBy::Size,
            sort_order: SortOrder::Descending,
        };
        let entries = list_directory(dir.path(), &options).unwrap();
        assert_eq!(names(&entries), vec!["large", "small"]);
    }

    #[test]
    fn test_listing_a_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, b"x").unwrap();

        assert!(matches!(
            list_directory(&file, &ListOptions::default()),
            Err(FsError::NotADirectory(_))
        ));
        assert!(matches!(
            list_directory(dir.path().join("missing"), &ListOptions::default()),
            Err(FsError::NotFound(_))
        ));
    }

    #[test]
    fn test_image_icon_ignores_case() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("SHOUT.PNG"), b"x").unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();

        let entries = list_directory(dir.path(), &ListOptions::default()).unwrap();
        assert_eq!(names(&entries), vec!["notes.txt", "SHOUT.PNG"]);
        assert_eq!(entries[0].icon(), EntryIcon::File);
        assert_eq!(entries[1].icon(), EntryIcon::Image);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_listed_under_their_own_names() {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("store");
        let browse = dir.path().join("browse");
        fs::create_dir_all(store.join("realdir")).unwrap();
        fs::create_dir(&browse).unwrap();
        fs::write(store.join("blob"), vec![0u8; 100]).unwrap();
        symlink(store.join("blob"), browse.join("logo.png")).unwrap();
        symlink(store.join("realdir"), browse.join("linkdir")).unwrap();
        symlink(store.join("gone"), browse.join("dangling")).unwrap();

        let entries = list_directory(&browse, &ListOptions::default()).unwrap();
        assert_eq!(names(&entries), vec!["linkdir", "dangling", "logo.png"]);

        assert!(entries[0].is_dir);
        assert_eq!(entries[0].path, UniversalPath::new(browse.join("linkdir")));
        assert!(!entries[1].is_dir);
        assert_eq!(entries[1].path, UniversalPath::new(browse.join("dangling")));
        assert_eq!(entries[2].size, 100);
        assert_eq!(entries[2].path, UniversalPath::new(browse.join("logo.png")));
    }

    #[test]
    fn test_unreadable_row_keeps_name() {
        let entry = FileEntry::unreadable(Path::new("/nowhere/.cache.png"));
        assert_eq!(entry.name, ".cache.png");
        assert_eq!(entry.extension, "png");
        assert!(entry.is_hidden || cfg!(windows));
        assert_eq!(entry.size, 0);
        assert_eq!(entry.modified, None);
    }

    #[cfg(unix)]
    #[test]
    fn test_root_has_no_parent() {
        assert!(is_root("/"));
        assert!(UniversalPath::new("/").parent().is_none());
        assert!(!is_root("/tmp"));
    }
}
