use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("Failed to load image '{path}': {message}")]
    ImageLoadError { path: PathBuf, message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Image is empty ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("Invalid image layout for {width}x{height} BGR: {reason}")]
    InvalidLayout {
        width: u32,
        height: u32,
        reason: String,
    },

    #[error("Display error: {message}")]
    DisplayError { message: String },

    #[error("Export error for '{path}': {message}")]
    ExportError { path: PathBuf, message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON parsing error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, HistogramError>;

impl HistogramError {
    /// Returns a user-friendly error message with recovery suggestions
    pub fn user_message(&self) -> String {
        let base_message = self.to_string();
        let suggestion = match self {
            HistogramError::FileNotFound { .. } => "Check if the file exists and you have permission to access it.",
            HistogramError::ImageLoadError { .. } => "The image file may be corrupted or in an unsupported format.",
            HistogramError::EmptyImage { .. } => "The histogram needs at least one pixel.",
            HistogramError::InvalidLayout { .. } => "Pixel buffers must hold exactly three bytes per pixel in blue-green-red order.",
            HistogramError::DisplayError { .. } => "No display is available. Use --no-window together with --output to run headless.",
            HistogramError::ExportError { .. } => "Export failed. Check if you have write permissions in the target directory.",
            HistogramError::JsonError { .. } => "Delete or fix settings.json; defaults will be used.",
            HistogramError::IoError { .. } => "File system error occurred. Check disk space and permissions.",
        };

        format!("{}\n\n{}", base_message, suggestion)
    }

    /// Returns an error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            HistogramError::ImageLoadError { .. } => "IMAGE_LOAD_ERROR",
            HistogramError::FileNotFound { .. } => "FILE_NOT_FOUND",
            HistogramError::EmptyImage { .. } => "EMPTY_IMAGE",
            HistogramError::InvalidLayout { .. } => "INVALID_LAYOUT",
            HistogramError::DisplayError { .. } => "DISPLAY_ERROR",
            HistogramError::ExportError { .. } => "EXPORT_ERROR",
            HistogramError::IoError { .. } => "IO_ERROR",
            HistogramError::JsonError { .. } => "JSON_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error = HistogramError::FileNotFound {
            path: PathBuf::from("/nonexistent/file.jpg"),
        };

        assert_eq!(error.error_code(), "FILE_NOT_FOUND");
        assert!(error.user_message().contains("Check if the file exists"));
    }

    #[test]
    fn test_layout_error_mentions_sizes() {
        let error = HistogramError::InvalidLayout {
            width: 2,
            height: 2,
            reason: "expected 12 bytes, got 11".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("12"));
        assert!(message.contains("11"));
        assert_eq!(error.error_code(), "INVALID_LAYOUT");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let error: HistogramError = io.into();
        assert_eq!(error.error_code(), "IO_ERROR");
    }
}
