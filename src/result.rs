use crate::constants::{denial, header};
use crate::headers::{HeaderEntry, Headers};
use crate::origin::RequestOrigin;
use crate::region::Region;
use crate::request::InboundRequest;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Response generated at the edge instead of forwarding the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectionResponse {
    pub status: String,
    pub status_description: String,
    pub headers: Headers,
    pub body: String,
}

impl RejectionResponse {
    pub fn ip_restricted() -> Self {
        let mut headers = Headers::with_capacity(1);
        headers.set(
            header::CONTENT_TYPE,
            vec![HeaderEntry::value_only(denial::CONTENT_TYPE)],
        );

        Self {
            status: denial::STATUS.to_string(),
            status_description: denial::STATUS_DESCRIPTION.to_string(),
            headers,
            body: denial::BODY.to_string(),
        }
    }
}

/// Why a request is forwarded without a region rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassThroughReason {
    MissingAuthorization,
    NoRegionInCredential,
    RegionNotAllowed(String),
}

/// Everything a successful rewrite changes, computed before the request is
/// touched.
#[derive(Debug, Clone, PartialEq)]
pub struct RewritePlan {
    pub region: Region,
    pub origin: RequestOrigin,
}

/// Classification of one request by [`crate::EdgeRewriter::evaluate`].
#[derive(Debug, Clone, PartialEq)]
pub enum RewriteDecision {
    Deny(RejectionResponse),
    PassThrough(PassThroughReason),
    Rewrite(RewritePlan),
}

/// What the edge runtime receives back from one invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EdgeOutcome {
    Forward(InboundRequest),
    Reject(RejectionResponse),
}

impl EdgeOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Reject(_))
    }

    pub fn request(&self) -> Option<&InboundRequest> {
        match self {
            Self::Forward(request) => Some(request),
            Self::Reject(_) => None,
        }
    }

    pub fn into_request(self) -> Option<InboundRequest> {
        match self {
            Self::Forward(request) => Some(request),
            Self::Reject(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&RejectionResponse> {
        match self {
            Self::Forward(_) => None,
            Self::Reject(response) => Some(response),
        }
    }
}

/// The invocation event does not carry the expected request envelope.
#[derive(Debug, Error)]
pub enum StructuralError {
    #[error("invalid event structure: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("invalid event structure: missing Records")]
    MissingRecords,
    #[error("invalid event structure: expected exactly one record, found {0}")]
    UnexpectedRecordCount(usize),
    #[error("invalid event structure: missing request object")]
    MissingRequest,
}

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Structural(#[from] StructuralError),
    #[error("failed to encode handler output: {0}")]
    Encode(#[source] serde_json::Error),
}
