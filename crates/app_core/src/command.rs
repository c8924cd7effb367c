//! Command system for user actions

use crate::{AppError, NavigationState};
use app_fs::{FileSystem, UniversalPath};
use std::collections::HashMap;

/// Command identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandId(pub String);

impl CommandId {
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    // File commands
    pub const FILE_REFRESH: &'static str = "file.refresh";

    // Navigation commands
    pub const NAV_CHANGE_DIRECTORY: &'static str = "nav.change_directory";
    pub const NAV_UP_LEVEL: &'static str = "nav.up_level";
    pub const NAV_SELECT_ENTRY: &'static str = "nav.select_entry";

    // App commands
    pub const APP_EXIT: &'static str = "app.exit";
}

/// Command with optional parameters
#[derive(Debug, Clone)]
pub struct Command {
    pub id: CommandId,
    pub params: CommandParams,
}

#[derive(Debug, Clone, Default)]
pub struct CommandParams {
    pub path_value: Option<UniversalPath>,
}

impl Command {
    pub fn new(id: &str) -> Self {
        Self {
            id: CommandId::new(id),
            params: CommandParams::default(),
        }
    }

    pub fn with_path(mut self, path: UniversalPath) -> Self {
        self.params.path_value = Some(path);
        self
    }

    pub fn refresh() -> Self {
        Self::new(CommandId::FILE_REFRESH)
    }

    pub fn change_directory(path: UniversalPath) -> Self {
        Self::new(CommandId::NAV_CHANGE_DIRECTORY).with_path(path)
    }

    pub fn up_level() -> Self {
        Self::new(CommandId::NAV_UP_LEVEL)
    }

    pub fn select_entry(path: UniversalPath) -> Self {
        Self::new(CommandId::NAV_SELECT_ENTRY).with_path(path)
    }

    fn required_path(&self) -> Result<&UniversalPath, AppError> {
        self.params
            .path_value
            .as_ref()
            .ok_or_else(|| AppError::MissingParameter {
                command: self.id.as_str().to_string(),
                parameter: "path",
            })
    }
}

/// Pointer gesture on a listing row, as discriminated by the toolkit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Single(UniversalPath),
    Double(UniversalPath),
}

impl Activation {
    /// Double activation navigates, single activation selects
    pub fn into_command(self) -> Command {
        match self {
            Activation::Single(path) => Command::select_entry(path),
            Activation::Double(path) => Command::change_directory(path),
        }
    }
}

/// Outcome of a handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Nothing to re-render
    Unchanged,
    /// Selection changed: re-render metrics, label and preview
    Info(NavigationState),
    /// Directory changed or explicit refresh: re-render everything
    Full(NavigationState),
}

/// A handler maps (state, command) to the next state
pub type CommandHandler =
    fn(&NavigationState, &Command, &dyn FileSystem) -> Result<Transition, AppError>;

/// Dispatch table from command ids to handlers
pub struct CommandDispatcher {
    handlers: HashMap<String, CommandHandler>,
}

impl CommandDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Dispatcher with the four navigation actions registered
    pub fn with_navigation() -> Self {
        let mut dispatcher = Self::new();
        dispatcher.register(CommandId::FILE_REFRESH, refresh);
        dispatcher.register(CommandId::NAV_CHANGE_DIRECTORY, change_directory);
        dispatcher.register(CommandId::NAV_UP_LEVEL, up_level);
        dispatcher.register(CommandId::NAV_SELECT_ENTRY, select_entry);
        dispatcher
    }

    pub fn register(&mut self, command_id: &str, handler: CommandHandler) {
        self.handlers.insert(command_id.to_string(), handler);
    }

    pub fn dispatch(
        &self,
        state: &NavigationState,
        cmd: &Command,
        fs: &dyn FileSystem,
    ) -> Result<Transition, AppError> {
        match self.handlers.get(cmd.id.as_str()) {
            Some(handler) => handler(state, cmd, fs),
            None => {
                tracing::warn!("Unknown command: {}", cmd.id.as_str());
                Ok(Transition::Unchanged)
            }
        }
    }

    pub fn can_execute(&self, cmd: &Command) -> bool {
        self.handlers.contains_key(cmd.id.as_str())
    }
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::with_navigation()
    }
}

fn refresh(state: &NavigationState, _cmd: &Command, _fs: &dyn FileSystem) -> Result<Transition, AppError> {
    Ok(Transition::Full(state.clone()))
}

fn change_directory(state: &NavigationState, cmd: &Command, fs: &dyn FileSystem) -> Result<Transition, AppError> {
    let path = cmd.required_path()?;
    if !fs.is_dir(path) {
        tracing::debug!("Ignoring change to non-directory {}", path);
        return Ok(Transition::Unchanged);
    }
    Ok(Transition::Full(state.with_directory(path.clone())))
}

fn up_level(state: &NavigationState, _cmd: &Command, fs: &dyn FileSystem) -> Result<Transition, AppError> {
    match fs.parent(state.current_directory()) {
        Some(parent) => Ok(Transition::Full(state.with_directory(parent))),
        None => {
            tracing::debug!("Already at root: {}", state.current_directory());
            Ok(Transition::Unchanged)
        }
    }
}

fn select_entry(state: &NavigationState, cmd: &Command, _fs: &dyn FileSystem) -> Result<Transition, AppError> {
    let path = cmd.required_path()?;
    Ok(Transition::Info(state.with_selection(path.clone())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_fs::LocalFileSystem;

    fn fixture() -> (tempfile::TempDir, NavigationState) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("subdir")).unwrap();
        std::fs::write(dir.path().join("note.txt"), b"hello").unwrap();
        let state = NavigationState::new(UniversalPath::new(dir.path()));
        (dir, state)
    }

    #[test]
    fn test_change_directory_into_subdir() {
        let (dir, state) = fixture();
        let dispatcher = CommandDispatcher::with_navigation();
        let state = state.with_selection(UniversalPath::new(dir.path().join("note.txt")));

        let subdir = UniversalPath::new(dir.path().join("subdir"));
        let transition = dispatcher
            .dispatch(&state, &Command::change_directory(subdir.clone()), &LocalFileSystem)
            .unwrap();

        assert_eq!(transition, Transition::Full(NavigationState::new(subdir)));
    }

    #[test]
    fn test_change_directory_to_file_is_ignored() {
        let (dir, state) = fixture();
        let dispatcher = CommandDispatcher::with_navigation();

        let file = UniversalPath::new(dir.path().join("note.txt"));
        let transition = dispatcher
            .dispatch(&state, &Command::change_directory(file), &LocalFileSystem)
            .unwrap();
        assert_eq!(transition, Transition::Unchanged);
    }

    #[test]
    fn test_up_level_moves_to_parent() {
        let (dir, _) = fixture();
        let dispatcher = CommandDispatcher::with_navigation();
        let state = NavigationState::new(UniversalPath::new(dir.path().join("subdir")));

        let transition = dispatcher
            .dispatch(&state, &Command::up_level(), &LocalFileSystem)
            .unwrap();
        assert_eq!(
            transition,
            Transition::Full(NavigationState::new(UniversalPath::new(dir.path())))
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_up_level_at_root_is_noop() {
        let dispatcher = CommandDispatcher::with_navigation();
        let state = NavigationState::new(UniversalPath::new("/"));

        for _ in 0..3 {
            let transition = dispatcher
                .dispatch(&state, &Command::up_level(), &LocalFileSystem)
                .unwrap();
            assert_eq!(transition, Transition::Unchanged);
        }
    }

    #[test]
    fn test_activation_routing() {
        let (dir, state) = fixture();
        let dispatcher = CommandDispatcher::with_navigation();
        let subdir = UniversalPath::new(dir.path().join("subdir"));

        let single = Activation::Single(subdir.clone()).into_command();
        assert_eq!(single.id.as_str(), CommandId::NAV_SELECT_ENTRY);
        assert_eq!(
            dispatcher.dispatch(&state, &single, &LocalFileSystem).unwrap(),
            Transition::Info(state.with_selection(subdir.clone()))
        );

        let double = Activation::Double(subdir.clone()).into_command();
        assert_eq!(double.id.as_str(), CommandId::NAV_CHANGE_DIRECTORY);
        assert_eq!(
            dispatcher.dispatch(&state, &double, &LocalFileSystem).unwrap(),
            Transition::Full(NavigationState::new(subdir))
        );
    }

    #[test]
    fn test_unknown_and_malformed_commands() {
        let (_dir, state) = fixture();
        let dispatcher = CommandDispatcher::with_navigation();

        let unknown = Command::new("view.zoom_in");
        assert!(!dispatcher.can_execute(&unknown));
        assert_eq!(
            dispatcher.dispatch(&state, &unknown, &LocalFileSystem).unwrap(),
            Transition::Unchanged
        );

        let missing = Command::new(CommandId::NAV_SELECT_ENTRY);
        assert!(matches!(
            dispatcher.dispatch(&state, &missing, &LocalFileSystem),
            Err(AppError::MissingParameter { parameter: "path", .. })
        ));
    }
}
