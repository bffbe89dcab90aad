use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocatorError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
