use gs_station::StationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Station(#[from] StationError),
}

pub type SimResult<T> = Result<T, SimError>;
