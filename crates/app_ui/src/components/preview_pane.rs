//! Preview pane: decodes the preview source into a texture

use app_core::PreviewState;
use app_fs::{FileSystem, UniversalPath};
use egui::{TextureHandle, Ui};

enum Loaded {
    Texture(TextureHandle),
    Unavailable(String),
}

/// Keeps the texture of the last decoded source
#[derive(Default)]
pub struct PreviewPane {
    loaded: Option<(UniversalPath, Loaded)>,
}

impl PreviewPane {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the cached texture so the next frame re-reads the source
    pub fn invalidate(&mut self) {
        self.loaded = None;
    }

    pub fn ui(&mut self, ui: &mut Ui, preview: &PreviewState, fs: &dyn FileSystem, limit: u64) {
        ui.vertical_centered(|ui| {
            ui.heading("Preview area");
        });
        ui.separator();

        if !preview.visible {
            return;
        }
        let Some(source) = &preview.source else {
            return;
        };

        let cached = matches!(&self.loaded, Some((path, _)) if path == source);
        if !cached {
            let loaded = load(ui.ctx(), source, fs, limit);
            self.loaded = Some((source.clone(), loaded));
        }

        let Some((_, loaded)) = &self.loaded else {
            return;
        };
        match loaded {
            Loaded::Texture(texture) => {
                let image = egui::Image::new((texture.id(), texture.size_vec2())).shrink_to_fit();
                if preview.expand {
                    ui.centered_and_justified(|ui| {
                        ui.add(image);
                    });
                } else {
                    ui.add(image);
                }
            }
            Loaded::Unavailable(reason) => {
                ui.centered_and_justified(|ui| {
                    ui.label(format!("Preview unavailable\n{}", reason));
                });
            }
        }
    }
}

fn load(ctx: &egui::Context, source: &UniversalPath, fs: &dyn FileSystem, limit: u64) -> Loaded {
    let name = source.file_name().unwrap_or_default().to_string();

    let bytes = match fs.read_source(source, limit) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Cannot read preview source {}: {}", source, e);
            return Loaded::Unavailable(name);
        }
    };

    match image::load_from_memory(&bytes) {
        Ok(img) => {
            let rgba = img.to_rgba8();
            let (width, height) = rgba.dimensions();
            let color_image = egui::ColorImage::from_rgba_unmultiplied(
                [width as usize, height as usize],
                rgba.as_flat_samples().as_slice(),
            );
            tracing::debug!("Preview decoded: {} ({}x{})", source, width, height);
            Loaded::Texture(ctx.load_texture(name, color_image, egui::TextureOptions::LINEAR))
        }
        Err(e) => {
            tracing::debug!("Cannot decode preview {}: {}", source, e);
            Loaded::Unavailable(name)
        }
    }
}
