use crate::constants::header;
use crate::headers::Headers;
use crate::origin::RequestOrigin;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The request object of an origin-request invocation.
///
/// Attributes the rewriter does not interpret (`body`, distribution metadata,
/// anything the platform adds later) are kept in `extra` and written back
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<String>,
    /// An absent attribute decodes to an empty collection and is left out
    /// again on output as long as nothing is added.
    #[serde(default = "Headers::omitted", skip_serializing_if = "Headers::is_omitted")]
    pub headers: Headers,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<RequestOrigin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub querystring: Option<String>,
    pub uri: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InboundRequest {
    pub fn new<M: Into<String>, U: Into<String>>(method: M, uri: U) -> Self {
        Self {
            method: method.into(),
            uri: uri.into(),
            ..Self::default()
        }
    }

    pub fn authorization(&self) -> Option<&str> {
        self.headers.first_value(header::AUTHORIZATION)
    }
}
