use crate::errors::{HistogramError, Result};
use crate::image_loader::HsHistogram;
use crate::render::render_histogram;
use image::{ImageFormat, RgbImage};
use std::path::{Path, PathBuf};

pub const WINDOW_TITLE: &str = "H-S Histogram";

/// Shows a rendered image and returns once the user has acknowledged it.
pub trait Presenter {
    fn present(&mut self, title: &str, image: &RgbImage) -> Result<()>;
}

/// Renders the histogram and hands it to `presenter`.
pub fn show_histogram(histogram: &HsHistogram, presenter: &mut dyn Presenter) -> Result<()> {
    let raster = render_histogram(histogram);
    presenter.present(WINDOW_TITLE, &raster)
}

/// Native window; blocks until a key is pressed or the window is closed.
#[derive(Debug, Default)]
pub struct WindowPresenter;

impl Presenter for WindowPresenter {
    fn present(&mut self, title: &str, image: &RgbImage) -> Result<()> {
        let (width, height) = image.dimensions();
        let pixels = egui::ColorImage::from_rgb([width as usize, height as usize], image.as_raw());

        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(title)
                .with_inner_size([width as f32, height as f32])
                .with_resizable(false),
            ..Default::default()
        };

        tracing::debug!(title, width, height, "opening histogram window");
        eframe::run_native(
            title,
            native_options,
            Box::new(|_cc| Ok(Box::new(HistogramWindow::new(pixels)))),
        )
        .map_err(|e| HistogramError::DisplayError {
            message: e.to_string(),
        })
    }
}

struct HistogramWindow {
    pixels: egui::ColorImage,
    texture: Option<egui::TextureHandle>,
}

impl HistogramWindow {
    fn new(pixels: egui::ColorImage) -> Self {
        Self {
            pixels,
            texture: None,
        }
    }
}

impl eframe::App for HistogramWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let pixels = &self.pixels;
        let texture = self.texture.get_or_insert_with(|| {
            ctx.load_texture("hs-histogram", pixels.clone(), egui::TextureOptions::NEAREST)
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                ui.image((texture.id(), texture.size_vec2()));
            });

        let key_pressed = ctx.input(|i| {
            i.events
                .iter()
                .any(|e| matches!(e, egui::Event::Key { pressed: true, .. }))
        });
        if key_pressed {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

/// Headless presenter that writes the image as PNG.
#[derive(Debug, Clone)]
pub struct FilePresenter {
    path: PathBuf,
}

impl FilePresenter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Presenter for FilePresenter {
    fn present(&mut self, title: &str, image: &RgbImage) -> Result<()> {
        image
            .save_with_format(&self.path, ImageFormat::Png)
            .map_err(|e| HistogramError::ExportError {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        tracing::info!(title, path = %self.path.display(), "saved histogram image");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        shown: Vec<(String, (u32, u32))>,
    }

    impl Presenter for Recorder {
        fn present(&mut self, title: &str, image: &RgbImage) -> Result<()> {
            self.shown.push((title.to_string(), image.dimensions()));
            Ok(())
        }
    }

    #[test]
    fn show_uses_fixed_title_and_rendered_size() {
        let mut recorder = Recorder::default();
        show_histogram(&HsHistogram::new(), &mut recorder).unwrap();

        assert_eq!(recorder.shown, vec![(WINDOW_TITLE.to_string(), (300, 320))]);
    }

    #[test]
    fn file_presenter_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let mut presenter = FilePresenter::new(dir.path().join("hist.png"));

        let mut histogram = HsHistogram::new();
        histogram.set(0, 0, 1.0);
        show_histogram(&histogram, &mut presenter).unwrap();

        let saved = image::open(presenter.path()).unwrap().to_rgb8();
        assert_eq!(saved.dimensions(), (300, 320));
        assert_eq!(saved.get_pixel(0, 0).0, [255, 255, 255]);
    }

    #[test]
    fn file_presenter_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut presenter = FilePresenter::new(dir.path().join("missing").join("hist.png"));

        let err = show_histogram(&HsHistogram::new(), &mut presenter).unwrap_err();
        assert_eq!(err.error_code(), "EXPORT_ERROR");
    }
}
