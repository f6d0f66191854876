use thiserror::Error;

#[derive(Error, Debug)]
pub enum SupplysightError {
    #[error("missing factor column: {0}")]
    MissingFactor(String),

    #[error("non-numeric value for {column}: {value:?}")]
    NonNumericFactor { column: String, value: String },

    #[error("{column} is {value}, outside the 1-5 scale")]
    OutOfRange { column: String, value: i64 },

    #[error("input file has no data rows: {0}")]
    EmptyInput(String),

    #[error("score {0} is outside [0, 100]")]
    ScoreContract(f64),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SupplysightError>;
