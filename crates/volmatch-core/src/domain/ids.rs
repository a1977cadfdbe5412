//! Domain identifiers (strongly-typed IDs).
//!
//! # Request / Candidate の ID
//! Request と Candidate のレコードは外部ストアが所有しているため、ID は
//! ストア側の文字列キーをそのまま保持します。Phantom type パターンで
//! `RequestId` と `CandidateId` を別の型にし、取り違えをコンパイル時に防ぎます。
//!
//! # RunId
//! マッチング実行ごとの ID は ULID（時刻でソート可能）で、
//! `IdGenerator` port が生成します。

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::marker::PhantomData;
use ulid::Ulid;

/// IdMarker は各 ID 型のマーカー trait
///
/// Display で使うプレフィックス（"request-", "candidate-"）を提供します。
pub trait IdMarker: Send + Sync + 'static {
    fn prefix() -> &'static str;
}

/// ストアのキーを包むジェネリック ID 型
///
/// ```ignore
/// let request_id = RequestId::new("req-42");
/// let candidate_id = CandidateId::new("req-42");
/// // 同じ文字列でも型が異なるので混同できない
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent, bound = "")]
pub struct Id<T: IdMarker> {
    key: String,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    /// Surrounding whitespace is not part of the key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into().trim().to_string(),
            _marker: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.key
    }

    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

// デシリアライズも new を通す（前後の空白を落とす）
impl<'de, T: IdMarker> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

impl<T: IdMarker> From<&str> for Id<T> {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl<T: IdMarker> From<String> for Id<T> {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", T::prefix(), self.key)
    }
}

// ========================================
// マーカー型の定義
// ========================================

/// Request のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RequestTag {}

impl IdMarker for RequestTag {
    fn prefix() -> &'static str {
        "request-"
    }
}

/// Candidate のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CandidateTag {}

impl IdMarker for CandidateTag {
    fn prefix() -> &'static str {
        "candidate-"
    }
}

/// Identifier of a help request (owned by the external store).
pub type RequestId = Id<RequestTag>;

/// Identifier of a volunteer profile (owned by the external store).
pub type CandidateId = Id<CandidateTag>;

/// Identifier of one matching run.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RunId(Ulid);

impl RunId {
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    pub fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl From<Ulid> for RunId {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run-{}", self.0)
    }
}
