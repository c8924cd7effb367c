//! Fileman Core Domain Logic
//!
//! This crate contains:
//! - Navigation state and session bootstrap
//! - Command system and dispatch table
//! - Presenter and render commands
//! - Preview policy and status texts
//! - Configuration
//! - Error types

pub mod navigation;
pub mod config;
pub mod command;
pub mod error;
pub mod preview;
pub mod status;
pub mod presenter;
pub mod session;

pub use navigation::NavigationState;
pub use config::{AppConfig, GeneralConfig, FilerConfig, PreviewConfig, DEFAULT_PREVIEW_LIMIT};
pub use command::{Activation, Command, CommandDispatcher, CommandHandler, CommandId, CommandParams, Transition};
pub use error::AppError;
pub use preview::{PreviewDecision, PreviewState, PREVIEW_EXTENSIONS};
pub use status::{MetricsView, METRIC_CAPTIONS, NOT_AVAILABLE};
pub use presenter::{FileEntryRow, PanelState, Presenter, RenderCommand};
