//! Fileman UI Layer
//!
//! Provides:
//! - egui panels (menu, toolbar, file table, preview, status bar)
//! - wgpu rendering pipeline
//! - Key binding resolution

pub mod renderer;
pub mod components;
pub mod input;
pub mod theme;

pub use renderer::Renderer;
pub use input::InputHandler;
pub use theme::Theme;
