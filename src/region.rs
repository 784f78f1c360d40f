use crate::constants::region;
use crate::util::is_region_code;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A signing region taken from a credential scope, e.g. `us-west-2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Region(String);

impl Region {
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_well_formed(&self) -> bool {
        is_region_code(&self.0)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Region {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Regions a request may be routed to. Matching is exact and case-sensitive,
/// the same way the backend treats the credential scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowedRegions(Vec<Region>);

impl AllowedRegions {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deduped: Vec<Region> = Vec::new();
        for value in values.into_iter() {
            let value: String = value.into();
            let region = Region::new(value.trim());
            if !deduped.contains(&region) {
                deduped.push(region);
            }
        }

        Self(deduped)
    }

    pub fn allows(&self, candidate: &str) -> bool {
        self.0.iter().any(|region| region.as_str() == candidate)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Default for AllowedRegions {
    fn default() -> Self {
        Self::list([
            region::US_EAST_1,
            region::US_WEST_2,
            region::AP_NORTHEAST_1,
            region::EU_WEST_1,
        ])
    }
}

#[cfg(test)]
#[path = "region_test.rs"]
mod region_test;
