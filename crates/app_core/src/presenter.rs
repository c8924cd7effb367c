//! Navigator/presenter: applies actions to the navigation state and
//! re-renders the panels that depend on it

use crate::preview::{self, PreviewState};
use crate::{AppConfig, AppError, Command, CommandDispatcher, MetricsView, NavigationState, Transition};
use app_fs::{FileEntry, FileSystem, ListOptions};

/// One update to the view
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    SetListing(Vec<FileEntryRow>),
    SetStatusLabel(String),
    SetMetrics(MetricsView),
    SetPreview(PreviewState),
}

/// Listing row as the table shows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntryRow {
    pub entry_path: app_fs::UniversalPath,
    pub name: String,
    pub is_dir: bool,
    pub size: u64,
    pub modified: Option<i64>,
    pub icon: app_fs::EntryIcon,
}

impl From<FileEntry> for FileEntryRow {
    fn from(entry: FileEntry) -> Self {
        let icon = entry.icon();
        Self {
            entry_path: entry.path,
            name: entry.name,
            is_dir: entry.is_dir,
            size: entry.size,
            modified: entry.modified,
            icon,
        }
    }
}

/// Retained panel contents, read by the view every frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelState {
    pub listing: Vec<FileEntryRow>,
    pub status_label: String,
    pub metrics: MetricsView,
    pub preview: PreviewState,
}

impl PanelState {
    pub fn apply(&mut self, command: RenderCommand) {
        match command {
            RenderCommand::SetListing(rows) => self.listing = rows,
            RenderCommand::SetStatusLabel(label) => self.status_label = label,
            RenderCommand::SetMetrics(metrics) => self.metrics = metrics,
            RenderCommand::SetPreview(preview) => self.preview = preview,
        }
    }
}

/// Owns one session's navigation state and its rendered panels
pub struct Presenter<F: FileSystem> {
    fs: F,
    state: NavigationState,
    panels: PanelState,
    dispatcher: CommandDispatcher,
    list_options: ListOptions,
    preview_limit: u64,
}

impl<F: FileSystem> Presenter<F> {
    /// Create a presenter and run the first full render
    pub fn new(fs: F, initial: NavigationState, config: &AppConfig) -> Self {
        let mut presenter = Self {
            fs,
            state: initial,
            panels: PanelState::default(),
            dispatcher: CommandDispatcher::with_navigation(),
            list_options: config.filer.list_options(),
            preview_limit: config.preview.max_file_size,
        };
        presenter.render_all();
        presenter
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn panels(&self) -> &PanelState {
        &self.panels
    }

    pub fn file_system(&self) -> &F {
        &self.fs
    }

    /// Run one user action and return the render commands it produced
    pub fn handle(&mut self, cmd: &Command) -> Result<Vec<RenderCommand>, AppError> {
        tracing::debug!("Action {} {:?}", cmd.id.as_str(), cmd.params.path_value);

        let transition = self.dispatcher.dispatch(&self.state, cmd, &self.fs)?;
        let commands = match transition {
            Transition::Unchanged => Vec::new(),
            Transition::Info(next) => {
                self.state = next;
                self.render_info()
            }
            Transition::Full(next) => {
                if next.current_directory() != self.state.current_directory() {
                    tracing::info!("Directory changed to {}", next.current_directory());
                }
                self.state = next;
                self.render_all()
            }
        };
        Ok(commands)
    }

    /// Listing, then everything `render_info` covers
    fn render_all(&mut self) -> Vec<RenderCommand> {
        let rows = match self.fs.list_directory(self.state.current_directory(), &self.list_options) {
            Ok(entries) => entries.into_iter().map(FileEntryRow::from).collect(),
            Err(e) => {
                tracing::warn!("Failed to list {}: {}", self.state.current_directory(), e);
                Vec::new()
            }
        };

        let mut commands = vec![RenderCommand::SetListing(rows)];
        self.apply(&commands);
        commands.extend(self.render_info());
        commands
    }

    /// Status label, metrics and preview
    fn render_info(&mut self) -> Vec<RenderCommand> {
        let label = match self.state.selected_entry() {
            Some(entry) => entry.to_string(),
            None => self.state.current_directory().to_string(),
        };

        let metrics = MetricsView::from_result(&self.fs.metrics(self.state.target()));

        let decision = preview::decide(self.state.selected_entry(), &self.fs, self.preview_limit);
        let preview = decision.apply(&self.panels.preview);

        let commands = vec![
            RenderCommand::SetStatusLabel(label),
            RenderCommand::SetMetrics(metrics),
            RenderCommand::SetPreview(preview),
        ];
        self.apply(&commands);
        commands
    }

    fn apply(&mut self, commands: &[RenderCommand]) {
        for command in commands {
            self.panels.apply(command.clone());
        }
    }
}
