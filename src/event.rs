use crate::request::InboundRequest;
use crate::result::StructuralError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Origin-request invocation envelope: `{"Records":[{"cf":{"request":…}}]}`.
///
/// Every level is optional at the type level so that a structurally
/// incomplete event decodes and is then rejected by [`EdgeEvent::into_request`]
/// with a precise [`StructuralError`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeEvent {
    #[serde(rename = "Records", default, skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<EdgeRecord>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cf: Option<CloudFrontPayload>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CloudFrontPayload {
    /// Distribution metadata (`distributionId`, `eventType`, …); informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<InboundRequest>,
}

impl EdgeEvent {
    pub fn from_request(request: InboundRequest) -> Self {
        Self {
            records: Some(vec![EdgeRecord {
                cf: Some(CloudFrontPayload {
                    config: None,
                    request: Some(request),
                }),
            }]),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, StructuralError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Takes the request out of the single record.
    pub fn into_request(self) -> Result<InboundRequest, StructuralError> {
        let mut records = self.records.ok_or(StructuralError::MissingRecords)?;
        if records.len() != 1 {
            return Err(StructuralError::UnexpectedRecordCount(records.len()));
        }

        records
            .pop()
            .and_then(|record| record.cf)
            .and_then(|cf| cf.request)
            .ok_or(StructuralError::MissingRequest)
    }
}

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;
