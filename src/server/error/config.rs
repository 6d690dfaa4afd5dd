use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but could not be parsed.
    #[error("Invalid value for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the variable
        name: String,
        /// Why the value was rejected
        reason: String,
    },

    /// An ordering or uniqueness binding points at an unusable column.
    ///
    /// Raised by the startup check before the server binds, so a broken binding never
    /// reaches a request.
    #[error("Invalid scoped field binding on `{table}.{column}`: {reason}")]
    InvalidScopedField {
        /// Table the binding belongs to
        table: String,
        /// Column being constrained
        column: String,
        /// What is wrong with the binding
        reason: String,
    },
}
