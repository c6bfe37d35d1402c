//! Snapshot loading interface and a file-based implementation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::core::scanner::AnalysisRequest;
use crate::markets::instrument::normalize_symbol;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("no snapshot for {symbol}")]
    NotFound { symbol: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed snapshot {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid symbol: {0}")]
    Symbol(String),
}

/// Supplies the latest analysis request (snapshot, price, timeframe) for an instrument
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn load(&self, symbol: &str) -> Result<AnalysisRequest, SourceError>;
}

/// Reads `<root>/<BASE_QUOTE>.json` envelopes written by the indicator producer
pub struct DirectorySnapshotSource {
    root: PathBuf,
}

impl DirectorySnapshotSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, symbol: &str) -> Result<PathBuf, SourceError> {
        let symbol = normalize_symbol(symbol).map_err(|e| SourceError::Symbol(e.to_string()))?;
        Ok(self.root.join(format!("{}.json", symbol)))
    }
}

#[async_trait]
impl SnapshotSource for DirectorySnapshotSource {
    async fn load(&self, symbol: &str) -> Result<AnalysisRequest, SourceError> {
        let path = self.path_for(symbol)?;
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SourceError::NotFound {
                    symbol: symbol.to_string(),
                })
            }
            Err(source) => return Err(SourceError::Io { path, source }),
        };
        let request: AnalysisRequest =
            serde_json::from_str(&raw).map_err(|source| SourceError::Parse {
                path: path.clone(),
                source,
            })?;
        debug!(symbol = %request.symbol, path = %path.display(), "Snapshot loaded");
        Ok(request)
    }
}
