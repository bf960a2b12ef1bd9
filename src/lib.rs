//! Hue/saturation histograms for color-based segmentation.
//!
//! Build a 30x32 frequency table from a BGR image with
//! [`compute_hs_histogram`], turn it into a 300x320 false-color image with
//! [`render_histogram`], or hand it to a [`Presenter`] with
//! [`show_histogram`].

pub mod errors;
pub mod image_loader;
pub mod logging;
pub mod render;
pub mod settings;
pub mod viewer;


pub use errors::{HistogramError, Result};
pub use image_loader::{
    bgr_to_hsv, compute_hs_histogram, compute_hs_histogram_from_dynamic, load_bgr_image,
    load_image, BgrImage, HsHistogram, HUE_BINS, SATURATION_BINS,
};
pub use render::{render_histogram, RENDER_HEIGHT, RENDER_WIDTH};
pub use settings::Settings;
pub use viewer::{show_histogram, FilePresenter, Presenter, WindowPresenter, WINDOW_TITLE};
