//! Application main loop

use anyhow::Result;
use app_core::{session, AppConfig, Command, CommandId, Presenter};
use app_fs::{FileSystem, LocalFileSystem};
use app_ui::{
    components::{FileTable, MenuBar, PreviewPane, StatusBar, Toolbar},
    InputHandler, Renderer, Theme,
};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

/// Main application state for the event loop
struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    egui_ctx: egui::Context,
    egui_state: Option<egui_winit::State>,

    presenter: Presenter<LocalFileSystem>,
    preview_pane: PreviewPane,
    input_handler: InputHandler,
    theme: Theme,
    config: AppConfig,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let initial = session::start(&config);
        let presenter = Presenter::new(LocalFileSystem, initial, &config);

        Self {
            window: None,
            renderer: None,
            egui_ctx: egui::Context::default(),
            egui_state: None,

            presenter,
            preview_pane: PreviewPane::new(),
            input_handler: InputHandler::new(config.keybindings.clone()),
            theme: Theme::by_name(&config.general.theme),
            config,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attrs = Window::default_attributes()
            .with_title(self.title())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.general.window_width,
                self.config.general.window_height,
            ));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let renderer = pollster::block_on(Renderer::new(window.clone()))?;

        let egui_state = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            None,
            None,
            None,
        );

        self.theme.apply(&self.egui_ctx);

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.egui_state = Some(egui_state);

        Ok(())
    }

    fn title(&self) -> String {
        format!("Fileman - {}", self.presenter.panels().status_label)
    }

    /// Run one action through the presenter
    fn execute_command(&mut self, cmd: &Command) {
        if cmd.id.as_str() == CommandId::FILE_REFRESH {
            self.preview_pane.invalidate();
        }

        match self.presenter.handle(cmd) {
            Ok(commands) => {
                tracing::debug!("{} produced {} render commands", cmd.id.as_str(), commands.len());
                if let Some(window) = &self.window {
                    window.set_title(&self.title());
                }
            }
            Err(e) if e.is_recoverable() => tracing::warn!("{}", e.user_message()),
            Err(e) => tracing::error!("{}", e.user_message()),
        }
    }

    fn render(&mut self) {
        let window = match &self.window {
            Some(w) => w.clone(),
            None => return,
        };

        let raw_input = match &mut self.egui_state {
            Some(state) => state.take_egui_input(&window),
            None => return,
        };

        // Actions collected during the frame, applied after it
        let mut pending: Option<Command> = None;

        let ctx = self.egui_ctx.clone();
        let full_output = ctx.run(raw_input, |ctx| {
            let panels = self.presenter.panels();
            let fs = self.presenter.file_system();
            let can_go_up = fs.parent(self.presenter.state().current_directory()).is_some();

            egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
                if let Some(action) = MenuBar::ui(ui) {
                    pending = Some(action.command());
                }
            });

            egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
                ui.add_space(2.0);
                if let Some(action) = Toolbar::ui(ui, &panels.status_label, can_go_up) {
                    pending = Some(action.command());
                }
                ui.add_space(2.0);
            });

            egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
                ui.add_space(2.0);
                StatusBar::ui(ui, &panels.metrics, self.theme.muted);
                ui.add_space(2.0);
            });

            egui::SidePanel::right("preview_panel")
                .resizable(true)
                .default_width(360.0)
                .min_width(160.0)
                .show(ctx, |ui| {
                    self.preview_pane
                        .ui(ui, &panels.preview, fs, self.config.preview.max_file_size);
                });

            egui::CentralPanel::default().show(ctx, |ui| {
                ui.label(egui::RichText::new("File System").strong());
                ui.separator();
                let selected = self.presenter.state().selected_entry();
                if let Some(activation) = FileTable::ui(ui, &panels.listing, selected) {
                    pending = Some(activation.into_command());
                }
            });
        });

        if let Some(cmd) = pending {
            self.execute_command(&cmd);
        }

        if let Some(egui_state) = &mut self.egui_state {
            egui_state.handle_platform_output(&window, full_output.platform_output);
        }

        let clipped_primitives = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        if let Some(renderer) = &mut self.renderer {
            renderer.paint(
                &clipped_primitives,
                &full_output.textures_delta,
                full_output.pixels_per_point,
            );
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                tracing::error!("Failed to initialize window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(egui_state), Some(window)) = (&mut self.egui_state, &self.window) {
            let response = egui_state.on_window_event(window, &event);
            if response.repaint {
                window.request_redraw();
            }
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize((size.width, size.height));
                }
            }

            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                if let Some(cmd) = self.input_handler.handle_key(&event) {
                    if cmd.id.as_str() == CommandId::APP_EXIT {
                        event_loop.exit();
                        return;
                    }
                    self.execute_command(&cmd);
                }
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.input_handler.update_modifiers(modifiers.state());
            }

            WindowEvent::RedrawRequested => {
                self.render();
                return;
            }

            _ => {}
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Run the application
pub fn run(config: AppConfig) -> Result<()> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    tracing::info!("Fileman exiting");
    Ok(())
}
