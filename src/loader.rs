use std::error::Error as _;
use std::path::PathBuf;

use tracing::{debug, error, warn};

use crate::error::SiteError;
use crate::row::Row;

#[cfg(feature = "async")]
use futures_util::future::BoxFuture;

/// Categories for recoverable load failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningCode {
    FetchFailed,
    DecodeFailed,
    MalformedCsv,
}

/// A load problem that was absorbed instead of failing the load.
#[derive(Debug, Clone)]
pub struct LoadWarning {
    pub code: WarningCode,
    pub message: String,
    pub location: Option<String>,
}

/// Rows produced by a load, plus any failures that were swallowed on the way.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    pub rows: Vec<Row>,
    pub warnings: Vec<LoadWarning>,
}

/// Where CSV bytes come from.
pub trait Source {
    /// Fetch the raw bytes stored at `path`.
    fn fetch(&self, path: &str) -> Result<Vec<u8>, SiteError>;
}

/// Async counterpart of [`Source`].
#[cfg(feature = "async")]
pub trait AsyncSource: Send + Sync {
    fn fetch<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<Vec<u8>, SiteError>>;
}

/// Reads CSV files relative to a root directory.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Default for FileSource {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Source for FileSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, SiteError> {
        Ok(std::fs::read(self.root.join(path))?)
    }
}

fn is_absolute_url(path: &str) -> bool {
    let lower = path.get(..8).unwrap_or(path).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Join a site-relative path onto a base URL. Absolute URLs pass through.
pub fn resolve_url(base: &str, path: &str) -> Result<String, SiteError> {
    if is_absolute_url(path) {
        return Ok(path.to_string());
    }
    if base.is_empty() {
        return Err(SiteError::InvalidSource {
            reason: format!("relative path {path:?} needs a base URL"),
        });
    }
    Ok(format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    ))
}

/// Fetches CSV over HTTP(S) with a blocking client.
///
/// Relative paths are resolved against `base`; absolute URLs are used as-is.
/// Any non-2xx status is treated as a failure.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Default)]
pub struct HttpSource {
    base: String,
}

#[cfg(not(target_arch = "wasm32"))]
impl HttpSource {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Source for HttpSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, SiteError> {
        let url = resolve_url(&self.base, path)?;
        let response = ureq::get(&url).call().map_err(|e| SiteError::Http {
            url: url.clone(),
            reason: e.to_string(),
        })?;
        response
            .into_body()
            .read_to_vec()
            .map_err(|e| SiteError::Http {
                url,
                reason: format!("failed to read response body: {e}"),
            })
    }
}

/// Async HTTP source backed by `reqwest`.
#[cfg(feature = "async-http")]
#[derive(Debug, Clone, Default)]
pub struct AsyncHttpSource {
    client: reqwest::Client,
    base: String,
}

#[cfg(feature = "async-http")]
impl AsyncHttpSource {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.into(),
        }
    }
}

#[cfg(feature = "async-http")]
impl AsyncSource for AsyncHttpSource {
    fn fetch<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<Vec<u8>, SiteError>> {
        Box::pin(async move {
            let url = resolve_url(&self.base, path)?;
            let http_err = |e: reqwest::Error| SiteError::Http {
                url: url.clone(),
                reason: e.to_string(),
            };
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .and_then(|r| r.error_for_status())
                .map_err(http_err)?;
            let body = response.bytes().await.map_err(http_err)?;
            Ok(body.to_vec())
        })
    }
}

/// Decode CSV bytes to text.
///
/// A UTF-8 or UTF-16 byte-order mark selects the encoding and is dropped.
/// Without a BOM, UTF-8 is tried first and Windows-1252 is the fallback.
/// Malformed sequences are replaced rather than rejected; the returned
/// warning says which decoding was applied.
pub fn decode_text(data: &[u8]) -> (String, Option<LoadWarning>) {
    if let Some((encoding, bom_len)) = encoding_rs::Encoding::for_bom(data) {
        let (text, had_errors) = encoding.decode_without_bom_handling(&data[bom_len..]);
        let warning = had_errors.then(|| LoadWarning {
            code: WarningCode::DecodeFailed,
            message: format!("invalid {} sequences replaced", encoding.name()),
            location: None,
        });
        return (text.into_owned(), warning);
    }

    match std::str::from_utf8(data) {
        Ok(text) => (text.to_string(), None),
        Err(e) => {
            let (text, _) = encoding_rs::WINDOWS_1252.decode_without_bom_handling(data);
            let warning = LoadWarning {
                code: WarningCode::DecodeFailed,
                message: format!("content is not valid UTF-8 ({e}); decoded as windows-1252"),
                location: None,
            };
            (text.into_owned(), Some(warning))
        }
    }
}

/// Parse CSV text into header-keyed rows.
///
/// The first record is the header. Blank lines are skipped. Short records
/// simply lack the trailing columns; cells beyond the header are dropped.
pub fn parse_text(text: &str) -> Result<Vec<Row>, SiteError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records = reader.records();

    // First record becomes the header
    let headers: Vec<String> = match records.next() {
        Some(header) => header?.iter().map(|s| s.to_string()).collect(),
        None => return Ok(Vec::new()),
    };

    let mut rows = Vec::new();
    for result in records {
        let record = result.map_err(|e| SiteError::MalformedCsv {
            reason: format!("failed to parse CSV row: {e}"),
        })?;
        let row = Row::from_pairs(
            headers
                .iter()
                .zip(record.iter())
                .map(|(h, v)| (h.as_str(), v)),
        );
        rows.push(row);
    }

    Ok(rows)
}

/// Decode and parse CSV bytes, dropping any decode warning.
pub fn parse_rows(data: &[u8]) -> Result<Vec<Row>, SiteError> {
    let (text, _) = decode_text(data);
    parse_text(&text)
}

fn error_chain(err: &SiteError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

fn warning_code(err: &SiteError) -> WarningCode {
    match err {
        SiteError::Io(_) | SiteError::Http { .. } | SiteError::InvalidSource { .. } => {
            WarningCode::FetchFailed
        }
        SiteError::Csv(_) | SiteError::MalformedCsv { .. } => WarningCode::MalformedCsv,
    }
}

/// Turn a fetch result into rows, absorbing every failure.
fn finish_load(path: &str, fetched: Result<Vec<u8>, SiteError>) -> LoadOutcome {
    let mut warnings = Vec::new();
    let parsed = fetched.and_then(|data| {
        let (text, warning) = decode_text(&data);
        if let Some(mut w) = warning {
            warn!(path, reason = %w.message, "CSV decode fallback");
            w.location = Some(path.to_string());
            warnings.push(w);
        }
        parse_text(&text)
    });

    match parsed {
        Ok(rows) => {
            debug!(path, rows = rows.len(), "loaded CSV");
            LoadOutcome { rows, warnings }
        }
        Err(err) => {
            let message = error_chain(&err);
            error!(path, error = %message, "CSV load error");
            warnings.push(LoadWarning {
                code: warning_code(&err),
                message,
                location: Some(path.to_string()),
            });
            LoadOutcome {
                rows: Vec::new(),
                warnings,
            }
        }
    }
}

/// Load and parse the CSV at `path`. Never fails: errors yield no rows and a
/// warning, and are logged.
pub fn load_csv(source: &dyn Source, path: &str) -> LoadOutcome {
    finish_load(path, source.fetch(path))
}

/// Async variant of [`load_csv`].
#[cfg(feature = "async")]
pub async fn load_csv_async(source: &dyn AsyncSource, path: &str) -> LoadOutcome {
    let fetched = source.fetch(path).await;
    finish_load(path, fetched)
}
