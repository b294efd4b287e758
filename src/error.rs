use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("label/record alignment error: {labels} labels for {records} records")]
    LabelAlignment { records: usize, labels: usize },
}

// Type alias for Result
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn alignment(records: usize, labels: usize) -> Self {
        Error::LabelAlignment { records, labels }
    }
}
