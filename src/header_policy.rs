use crate::constants::header;
use crate::headers::Headers;
use crate::util::{equals_ignore_case, normalize_lower};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How request headers are pruned before the request leaves the edge.
///
/// Configured as `{"strip": [...]}`, `{"retain": [...]}` or the bare string
/// `"retainSigningHeaders"` for [`HeaderCleanup::retain_signing_headers`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "HeaderCleanupConfig")]
pub enum HeaderCleanup {
    /// Remove the listed headers and keep everything else.
    Strip(Vec<String>),
    /// Keep only the listed headers.
    Retain(Vec<String>),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
enum HeaderCleanupConfig {
    Strip(Vec<String>),
    Retain(Vec<String>),
    RetainSigningHeaders,
}

impl From<HeaderCleanupConfig> for HeaderCleanup {
    fn from(config: HeaderCleanupConfig) -> Self {
        match config {
            HeaderCleanupConfig::Strip(names) => Self::strip(names),
            HeaderCleanupConfig::Retain(names) => Self::retain(names),
            HeaderCleanupConfig::RetainSigningHeaders => Self::retain_signing_headers(),
        }
    }
}

impl Default for HeaderCleanup {
    fn default() -> Self {
        Self::strip([header::X_FORWARDED_FOR])
    }
}

impl HeaderCleanup {
    pub fn strip<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Strip(dedupe_names(names))
    }

    pub fn retain<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Retain(dedupe_names(names))
    }

    /// Keep-list of the headers a SigV4-signed backend call needs.
    pub fn retain_signing_headers() -> Self {
        Self::retain([
            header::AUTHORIZATION,
            header::X_AMZ_DATE,
            header::X_AMZ_SECURITY_TOKEN,
            header::HOST,
            header::CONTENT_TYPE,
        ])
    }

    pub fn names(&self) -> &[String] {
        match self {
            Self::Strip(names) | Self::Retain(names) => names,
        }
    }

    fn lists(&self, name: &str) -> bool {
        self.names()
            .iter()
            .any(|listed| equals_ignore_case(listed, name))
    }

    /// Prunes `headers` in place and returns the names that were dropped, in
    /// their original order.
    pub fn apply(&self, headers: &mut Headers) -> Vec<String> {
        let dropped: Vec<String> = headers
            .names()
            .filter(|name| match self {
                Self::Strip(_) => self.lists(name),
                Self::Retain(_) => !self.lists(name),
            })
            .map(str::to_string)
            .collect();

        if !dropped.is_empty() {
            headers.retain(|name| !dropped.iter().any(|dropped| dropped == name));
        }
        dropped
    }
}

fn dedupe_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let mut deduped = Vec::new();
    for name in names.into_iter() {
        let name: String = name.into();
        let trimmed = name.trim().to_string();
        if seen.insert(normalize_lower(&trimmed)) {
            deduped.push(trimmed);
        }
    }
    deduped
}

/// Which outcomes the header cleanup runs on. Denied requests are never
/// touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CleanupScope {
    /// Only when the request is routed to a regional backend.
    #[default]
    Rewrite,
    /// Also when the request passes through without a rewrite.
    Always,
}

#[cfg(test)]
#[path = "header_policy_test.rs"]
mod header_policy_test;
