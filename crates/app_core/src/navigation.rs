//! Navigation state: the current directory and the optional selection

use app_fs::UniversalPath;

/// Per-session navigation state
///
/// Transitions build a new value; the presenter swaps it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    current_directory: UniversalPath,
    selected_entry: Option<UniversalPath>,
}

impl NavigationState {
    pub fn new(current_directory: UniversalPath) -> Self {
        Self {
            current_directory,
            selected_entry: None,
        }
    }

    pub fn current_directory(&self) -> &UniversalPath {
        &self.current_directory
    }

    pub fn selected_entry(&self) -> Option<&UniversalPath> {
        self.selected_entry.as_ref()
    }

    /// The path metrics and preview are computed for
    pub fn target(&self) -> &UniversalPath {
        self.selected_entry.as_ref().unwrap_or(&self.current_directory)
    }

    /// Enter `directory`, dropping the selection
    pub fn with_directory(&self, directory: UniversalPath) -> Self {
        Self::new(directory)
    }

    pub fn with_selection(&self, entry: UniversalPath) -> Self {
        Self {
            current_directory: self.current_directory.clone(),
            selected_entry: Some(entry),
        }
    }

    pub fn has_selection(&self) -> bool {
        self.selected_entry.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_prefers_selection() {
        let state = NavigationState::new(UniversalPath::new("/data"));
        assert_eq!(state.target(), &UniversalPath::new("/data"));

        let selected = state.with_selection(UniversalPath::new("/data/a.png"));
        assert_eq!(selected.target(), &UniversalPath::new("/data/a.png"));
        assert_eq!(selected.current_directory(), &UniversalPath::new("/data"));
    }

    #[test]
    fn test_directory_change_clears_selection() {
        let state = NavigationState::new(UniversalPath::new("/data"))
            .with_selection(UniversalPath::new("/data/a.png"));

        let moved = state.with_directory(UniversalPath::new("/data/sub"));
        assert!(!moved.has_selection());
        assert_eq!(moved.current_directory(), &UniversalPath::new("/data/sub"));
    }
}
