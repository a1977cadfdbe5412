//! Errors - エラー型と分類
//!
//! - **MatchError**: 実行全体を止める致命的エラー（呼び出し元に返す、書き込みなし）
//! - **StoreError**: ストア（外部コラボレータ）が返すエラー
//! - **CandidateDataError**: 候補者 1 件の不正データ（その候補者だけ除外して続行）

use thiserror::Error;

use super::ids::{CandidateId, RequestId};

/// ErrorKind は致命的エラーの運用分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request does not exist. Retrying will not help.
    NotFound,
    /// Storage failed while loading or writing.
    Infrastructure,
}

/// Errors reported by a `MatchStore` implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} does not exist")]
    RequestNotFound(RequestId),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Fatal errors of one matching run. No results are written when one occurs.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("{0} not found")]
    NotFound(RequestId),

    #[error(transparent)]
    StoreUnavailable(StoreError),
}

impl MatchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MatchError::NotFound(_) => ErrorKind::NotFound,
            MatchError::StoreUnavailable(_) => ErrorKind::Infrastructure,
        }
    }
}

impl From<StoreError> for MatchError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::RequestNotFound(id) => MatchError::NotFound(id),
            other => MatchError::StoreUnavailable(other),
        }
    }
}

/// A single candidate document could not be decoded.
#[derive(Debug, Error)]
pub enum CandidateDataError {
    #[error("{0}: document is not an object")]
    NotAnObject(CandidateId),

    #[error("{id}: {source}")]
    InvalidField {
        id: CandidateId,
        #[source]
        source: serde_json::Error,
    },
}

impl CandidateDataError {
    pub fn candidate_id(&self) -> &CandidateId {
        match self {
            CandidateDataError::NotAnObject(id) => id,
            CandidateDataError::InvalidField { id, .. } => id,
        }
    }
}
