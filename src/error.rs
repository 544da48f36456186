use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradeError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("malformed assignment (expected FIELD=VALUE): {0}")]
    MalformedAssignment(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid config: {0}")]
    ConfigInvalid(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GradeError>;
