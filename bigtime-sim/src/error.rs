//! Simulator errors

use std::path::PathBuf;

use bigtime_core::traits::DisplayError;

/// Errors that stop a simulation run
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// The configuration file could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for this simulator
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// A scenario entry could not be understood
    #[error("invalid scenario {field} {value:?}: {reason}")]
    Scenario {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    /// The clock face window could not be created
    #[error("clock face failed to start: {0:?}")]
    Start(DisplayError),

    /// Resources were not balanced after shutdown
    #[error("after shutdown: {live} live image(s), {orphaned} orphaned layer(s), {unknown} unknown release(s)")]
    Leaked {
        live: usize,
        orphaned: usize,
        unknown: usize,
    },
}

impl SimError {
    pub fn scenario(field: &'static str, value: &str, reason: &'static str) -> Self {
        SimError::Scenario {
            field,
            value: value.to_string(),
            reason,
        }
    }
}
