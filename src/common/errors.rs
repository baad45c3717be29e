use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("No page is registered for {0:?}")]
    Unknown(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Malformed site config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid site config: {0}")]
    Invalid(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please tell us your name")]
    MissingName,

    #[error("Please enter your email address")]
    MissingEmail,

    #[error("{0:?} doesn't look like an email address")]
    InvalidEmail(String),
}

