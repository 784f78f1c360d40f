use crate::constants::backend;
use crate::headers::Headers;
use crate::region::Region;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginProtocol {
    Http,
    Https,
}

/// `origin.custom` as the edge platform encodes it.
///
/// Every attribute is optional on input so that an origin the platform sends
/// with fewer or additional attributes is forwarded exactly as received.
/// Attributes not modelled here are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomOrigin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<OriginProtocol>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_protocols: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_timeout: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keepalive_timeout: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_headers: Option<Headers>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Upstream target of a request. S3 origins are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestOrigin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomOrigin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3: Option<Value>,
}

impl RequestOrigin {
    pub fn custom(origin: CustomOrigin) -> Self {
        Self {
            custom: Some(origin),
            s3: None,
        }
    }

    pub fn domain_name(&self) -> Option<&str> {
        self.custom
            .as_ref()
            .and_then(|custom| custom.domain_name.as_deref())
    }
}

/// Shape of the regional backend a rewritten request is sent to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackendTemplate {
    /// Host name with a `{region}` placeholder.
    pub host_template: String,
    pub port: u16,
    pub protocol: OriginProtocol,
    pub ssl_protocols: Vec<String>,
    pub read_timeout: u32,
    pub keepalive_timeout: u32,
}

impl Default for BackendTemplate {
    fn default() -> Self {
        Self {
            host_template: backend::HOST_TEMPLATE.to_string(),
            port: backend::HTTPS_PORT,
            protocol: OriginProtocol::Https,
            ssl_protocols: vec![backend::TLS_V1_2.to_string()],
            read_timeout: backend::READ_TIMEOUT_SECS,
            keepalive_timeout: backend::KEEPALIVE_TIMEOUT_SECS,
        }
    }
}

impl BackendTemplate {
    pub fn host_for(&self, region: &Region) -> String {
        self.host_template
            .replace(backend::REGION_PLACEHOLDER, region.as_str())
    }

    pub fn origin_for(&self, region: &Region) -> RequestOrigin {
        RequestOrigin::custom(CustomOrigin {
            domain_name: Some(self.host_for(region)),
            port: Some(self.port),
            protocol: Some(self.protocol),
            path: None,
            ssl_protocols: Some(self.ssl_protocols.clone()),
            read_timeout: Some(self.read_timeout),
            keepalive_timeout: Some(self.keepalive_timeout),
            custom_headers: Some(Headers::new()),
            extra: Map::new(),
        })
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
