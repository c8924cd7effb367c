//! UI Components

pub mod menu_bar;
pub mod toolbar;
pub mod file_table;
pub mod preview_pane;
pub mod status_bar;

pub use menu_bar::MenuBar;
pub use toolbar::{Toolbar, ToolbarAction};
pub use file_table::FileTable;
pub use preview_pane::PreviewPane;
pub use status_bar::StatusBar;
