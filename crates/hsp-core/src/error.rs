use thiserror::Error;

pub type HspResult<T> = Result<T, HspError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HspError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
