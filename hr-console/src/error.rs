//! Console error type.

use thiserror::Error;

use crate::data::LoadError;
use crate::settings::SettingsError;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("table configuration: {0}")]
    Table(#[from] datatable::TableError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not start logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("no record with id '{0}'")]
    UnknownRecord(String),
}
