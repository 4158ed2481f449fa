use leptos::*;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Encode(String),
    #[error("{0}")]
    Device(String),
    #[error("{0}")]
    Storage(String),
    #[error("{0}")]
    Config(String),
    #[error("{0}")]
    Download(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub fn device(msg: impl Into<String>) -> Self {
        Self::Device(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn download(msg: impl Into<String>) -> Self {
        Self::Download(msg.into())
    }

    /// Headline shown above the message in the notice banner.
    pub fn title(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "Error",
            AppError::Encode(_) => "QR Code Error",
            AppError::Device(_) => "Camera Unavailable",
            AppError::Storage(_) => "Storage Error",
            AppError::Config(_) => "Configuration Error",
            AppError::Download(_) => "Download Failed",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Encode(_) => "ENCODE_ERROR",
            AppError::Device(_) => "DEVICE_ERROR",
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Download(_) => "DOWNLOAD_ERROR",
        }
    }
}

impl From<AppError> for String {
    fn from(error: AppError) -> Self {
        error.to_string()
    }
}

impl IntoView for AppError {
    fn into_view(self) -> View {
        self.to_string().into_view()
    }
}
