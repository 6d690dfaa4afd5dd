use std::{net::SocketAddr, path::PathBuf, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_MEDIA_ROOT: &str = "media";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    /// Directory uploaded images are stored below.
    pub media_root: PathBuf,
    /// Request body limit of the image upload endpoint.
    pub max_upload_bytes: usize,

    /// Origin allowed to call the API from a browser; CORS stays closed when unset.
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        Ok(Self {
            database_url,
            bind_address: parse_or(&lookup, "BIND_ADDRESS", DEFAULT_BIND_ADDRESS)?,
            media_root: lookup("MEDIA_ROOT")
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MEDIA_ROOT)),
            max_upload_bytes: match lookup("MAX_UPLOAD_BYTES") {
                Some(value) => parse_var("MAX_UPLOAD_BYTES", &value)?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
            cors_allowed_origin: lookup("CORS_ALLOWED_ORIGIN").filter(|value| !value.is_empty()),
        })
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let value = lookup(name).unwrap_or_else(|| default.to_string());

    parse_var(name, &value)
}

fn parse_var<T>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
