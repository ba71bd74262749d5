//! Error types for naturid.

/// Result type alias for naturid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for naturid.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Category not found in configuration.
    #[error("category '{name}' not found in configuration")]
    CategoryNotFound {
        /// Name of the missing category.
        name: String,
    },

    /// Category already exists in configuration.
    #[error("category '{name}' already exists in configuration")]
    CategoryAlreadyExists {
        /// Name of the existing category.
        name: String,
    },

    /// Model file does not exist.
    #[error("model file does not exist: {path}")]
    ModelFileNotFound {
        /// Path to the missing model file.
        path: std::path::PathBuf,
    },

    /// Labels file does not exist.
    #[error("labels file does not exist: {path}")]
    LabelsFileNotFound {
        /// Path to the missing labels file.
        path: std::path::PathBuf,
    },

    /// Failed to read labels file.
    #[error("failed to read labels file '{path}'")]
    LabelsRead {
        /// Path to the labels file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Labels file could not be decoded under any supported encoding.
    #[error("labels file '{path}' is not valid UTF-8 or UTF-16 text")]
    LabelsUndecodable {
        /// Path to the labels file.
        path: std::path::PathBuf,
    },

    /// Failed to decode an image file.
    #[error("failed to decode image '{path}'")]
    ImageDecode {
        /// Path to the image file.
        path: std::path::PathBuf,
        /// Underlying decode error.
        #[source]
        source: image::ImageError,
    },

    /// Failed to load a model artifact.
    #[error("failed to load model '{path}': {reason}")]
    ModelLoad {
        /// Path to the model file.
        path: std::path::PathBuf,
        /// Description of the load failure.
        reason: String,
    },

    /// Model declares degenerate quantization parameters.
    #[error("invalid model descriptor: {reason}")]
    InvalidModelDescriptor {
        /// Description of the degenerate parameter.
        reason: String,
    },

    /// Input tensor does not match the model's declared input.
    #[error("input tensor mismatch: model expects {expected}, got {actual}")]
    ShapeMismatch {
        /// Expected dtype and shape.
        expected: String,
        /// Supplied dtype and shape.
        actual: String,
    },

    /// Inference failed.
    #[error("inference failed: {reason}")]
    Inference {
        /// Description of the inference failure.
        reason: String,
    },

    /// Failed to serialize a result to JSON.
    #[error("failed to serialize result to JSON")]
    JsonSerialize {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// Internal error (for unexpected failures).
    #[error("internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}
