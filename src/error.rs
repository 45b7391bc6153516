use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("launch parameters must be finite numbers")]
    NonFiniteInput,

    #[error("{0}")]
    Input(String),

    #[error("could not read config '{}': {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config is not valid YAML: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("invalid config value: {0}")]
    InvalidConfig(String),

    #[error("simulation finished without ever starting a run")]
    NotStarted,

    #[error("run did not finish within {0} ticks")]
    TickLimit(u64),

    #[error("invalid sweep: {0}")]
    InvalidSweep(String),

    #[error("plot rendering failed: {0}")]
    Plot(String),
}

pub type Result<T> = std::result::Result<T, SimError>;
