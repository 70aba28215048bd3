use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable get data from source\nFrom: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{url} answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Unable to parse configuration\nFrom: {0}")]
    Config(#[from] toml_edit::TomlError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Extractor failed on {url}: {msg}")]
    Extractor { url: String, msg: String },

    // Invalid errors
    #[error("Invalid origin `{0}`")]
    InvalidOrigin(String),

    #[error("Invalid url `{0}`")]
    InvalidUrl(String),
}

impl Error {
    pub fn extractor(url: &str, msg: impl ToString) -> Self {
        Error::Extractor {
            url: url.to_string(),
            msg: msg.to_string(),
        }
    }
}
