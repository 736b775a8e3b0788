use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnrichError {
    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Unknown style: {0}")]
    UnknownStyle(String),

    #[error("InvalidData: {0}")]
    InvalidData(String),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::XlsxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
