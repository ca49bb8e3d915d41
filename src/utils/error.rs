use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown field path '{path}'")]
    InvalidFieldPath { path: String },

    #[error("Item source failed: {message}")]
    SourceError { message: String },

    #[error("Background resolution task failed: {message}")]
    TaskJoin { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Source,
    Runtime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::ConfigError { .. }
            | CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::InvalidFieldPath { .. }
            | CatalogError::IoError(_) => ErrorCategory::Configuration,
            CatalogError::SourceError { .. } | CatalogError::SerializationError(_) => {
                ErrorCategory::Source
            }
            CatalogError::TaskJoin { .. } => ErrorCategory::Runtime,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CatalogError::SourceError { .. } => ErrorSeverity::Medium,
            CatalogError::ConfigError { .. }
            | CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::InvalidFieldPath { .. }
            | CatalogError::SerializationError(_)
            | CatalogError::IoError(_) => ErrorSeverity::High,
            CatalogError::TaskJoin { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::IoError(e) => format!("Could not read the catalog file: {}", e),
            CatalogError::InvalidFieldPath { path } => {
                format!("'{}' is not a field this tool knows how to read", path)
            }
            CatalogError::SourceError { message } => {
                format!("The item source reported a failure: {}", message)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => match self {
                CatalogError::InvalidFieldPath { .. } => {
                    "Use one of: id, group.name, group.package.name, group.package.code, group.package.code.name"
                }
                CatalogError::IoError(_) => "Check that the --catalog path exists and is readable",
                _ => "Check the catalog TOML file and the command line arguments",
            },
            ErrorCategory::Source => "Verify the item source is reachable and its data is well formed",
            ErrorCategory::Runtime => "Retry the command; if it keeps failing, run with --verbose",
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
