/// Errors that can occur while fetching or parsing the course CSV.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("request to {url} failed: {reason}")]
    Http { url: String, reason: String },

    #[error("failed to parse CSV")]
    Csv(#[from] csv::Error),

    #[error("malformed CSV: {reason}")]
    MalformedCsv { reason: String },

    #[error("invalid source: {reason}")]
    InvalidSource { reason: String },
}
