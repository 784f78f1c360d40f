use once_cell::sync::Lazy;
use regex_automata::meta::Regex;
use regex_automata::util::captures::Captures;

// Three slash-delimited segments after the literal, then an optional service.
static CREDENTIAL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Credential=([^/]+)/([^/]+)/([^/]+)(?:/([^/,\s]+))?")
        .expect("credential scope pattern is valid")
});

/// The `Credential=` parameter of a SigV4 `authorization` header, split into
/// its scope components. Slices borrow from the header value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialScope<'a> {
    pub access_key: &'a str,
    pub date: &'a str,
    pub region: &'a str,
    pub service: Option<&'a str>,
}

impl<'a> CredentialScope<'a> {
    /// Returns `None` when the value carries no `Credential=<key>/<date>/<region>`
    /// sequence. Nothing after the region is required.
    pub fn parse(authorization: &'a str) -> Option<Self> {
        let mut caps = CREDENTIAL_PATTERN.create_captures();
        CREDENTIAL_PATTERN.captures(authorization, &mut caps);
        if !caps.is_match() {
            return None;
        }

        Some(Self {
            access_key: group(&caps, authorization, 1)?,
            date: group(&caps, authorization, 2)?,
            region: group(&caps, authorization, 3)?,
            service: group(&caps, authorization, 4),
        })
    }
}

fn group<'h>(caps: &Captures, haystack: &'h str, index: usize) -> Option<&'h str> {
    caps.get_group(index)
        .map(|span| &haystack[span.start..span.end])
}

#[cfg(test)]
#[path = "credential_test.rs"]
mod credential_test;
