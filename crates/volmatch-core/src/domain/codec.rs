//! CandidateDocument - ストアから受け取る生の候補者ドキュメント
//!
//! ストアは候補者を JSON ドキュメントのまま渡し、デコードはこちらで行います。
//! 1 件のドキュメントが壊れていても、その候補者だけを `CandidateDataError`
//! として除外できるようにするためです。
//!
//! # デコードフロー
//! 1. ルートが JSON object であることを確認
//! 2. ドキュメント ID を `id` フィールドとして上書き（本文の `id` より優先）
//! 3. serde_json で `Candidate` にデシリアライズ

use serde::{Deserialize, Serialize};

use super::candidate::Candidate;
use super::errors::CandidateDataError;
use super::ids::CandidateId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateDocument {
    pub id: CandidateId,
    pub data: serde_json::Value,
}

impl CandidateDocument {
    pub fn new(id: impl Into<CandidateId>, data: serde_json::Value) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    /// Encode an already-typed candidate (fixtures, tests).
    pub fn from_candidate(candidate: &Candidate) -> Result<Self, serde_json::Error> {
        let data = serde_json::to_value(candidate)?;
        Ok(Self::new(candidate.id.clone(), data))
    }

    pub fn decode(&self) -> Result<Candidate, CandidateDataError> {
        let serde_json::Value::Object(fields) = &self.data else {
            return Err(CandidateDataError::NotAnObject(self.id.clone()));
        };

        let mut fields = fields.clone();
        fields.insert(
            "id".to_string(),
            serde_json::Value::String(self.id.as_str().to_string()),
        );

        serde_json::from_value(serde_json::Value::Object(fields)).map_err(|source| {
            CandidateDataError::InvalidField {
                id: self.id.clone(),
                source,
            }
        })
    }
}
