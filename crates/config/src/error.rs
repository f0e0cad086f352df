use projector_common::FromMessage;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    TomlDeserialize(#[from] toml::de::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Common(#[from] projector_common::Error),
    #[error("unsupported config format: .{0}")]
    UnsupportedFormat(String),
    #[error("{field} is not configured (set {env_var} or `{key}` in the config file)")]
    Missing {
        field: &'static str,
        env_var: &'static str,
        key: &'static str,
    },
    #[error("{message}")]
    Message { message: String },
}

impl FromMessage for Error {
    fn from_message(message: String) -> Self {
        Self::Message { message }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

projector_common::impl_context!();
