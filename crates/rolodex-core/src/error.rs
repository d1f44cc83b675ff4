use thiserror::Error;

/// All errors that can occur in rolodex-core.
#[derive(Debug, Error)]
pub enum RolodexError {
    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Malformed people payload: {0}")]
    MalformedPayload(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Exit codes used by the `rolodex` binary.
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidArgs = 3,
    NetworkError = 6,
    NoSelection = 9,
}

pub type Result<T> = std::result::Result<T, RolodexError>;
