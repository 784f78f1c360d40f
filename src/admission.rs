use crate::constants::header;
use crate::request::InboundRequest;
use crate::util::first_list_item;
use serde::{Deserialize, Serialize};
use std::net::{AddrParseError, IpAddr};

/// Where the client address used for admission is read from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AdmissionSource {
    /// First entry of the first `x-forwarded-for` value.
    #[default]
    ForwardedFor,
    /// The `clientIp` attribute the edge platform attaches to the request.
    ClientIp,
}

impl AdmissionSource {
    pub fn client_address<'a>(&self, request: &'a InboundRequest) -> Option<&'a str> {
        let address = match self {
            Self::ForwardedFor => request
                .headers
                .first_value(header::X_FORWARDED_FOR)
                .map(first_list_item),
            Self::ClientIp => request.client_ip.as_deref().map(str::trim),
        };
        address.filter(|address| !address.is_empty())
    }
}

/// IP allow-list. An empty list admits every request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowedIps(Vec<String>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedAllowList {
    addresses: Vec<IpAddr>,
    require_address: bool,
}

impl AllowedIps {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            values
                .into_iter()
                .map(|value| {
                    let value: String = value.into();
                    value.trim().to_string()
                })
                .collect(),
        )
    }

    pub fn is_enabled(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Parses every literal, reporting the first one that is not an IP address.
    pub(crate) fn parse(&self) -> Result<ParsedAllowList, (String, AddrParseError)> {
        let mut parsed = Vec::with_capacity(self.0.len());
        for literal in &self.0 {
            let address = literal
                .parse::<IpAddr>()
                .map_err(|err| (literal.clone(), err))?;
            if !parsed.contains(&address) {
                parsed.push(address);
            }
        }
        Ok(ParsedAllowList {
            addresses: parsed,
            require_address: false,
        })
    }
}

impl ParsedAllowList {
    /// Whether a request that carries no client address is refused instead
    /// of admitted while the list is enabled.
    pub(crate) fn requiring_address(mut self, required: bool) -> Self {
        self.require_address = required;
        self
    }

    pub(crate) fn is_enabled(&self) -> bool {
        !self.addresses.is_empty()
    }

    /// Membership check on the parsed address, so `::1` and `0:0::1` compare
    /// equal. A present address that does not parse is not a member. An
    /// absent address is admitted unless the list requires one.
    pub(crate) fn admits(&self, address: Option<&str>) -> bool {
        if !self.is_enabled() {
            return true;
        }

        match address {
            None => !self.require_address,
            Some(value) => value
                .parse::<IpAddr>()
                .is_ok_and(|parsed| self.addresses.contains(&parsed)),
        }
    }
}

#[cfg(test)]
#[path = "admission_test.rs"]
mod admission_test;
