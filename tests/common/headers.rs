#![allow(dead_code)]

use bedrock_edge_proxy::{HeaderEntry, Headers};

pub fn header_value<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers.first_value(name)
}

pub fn has_header(headers: &Headers, name: &str) -> bool {
    headers.contains(name)
}

pub fn header_entries(headers: &Headers, name: &str) -> Vec<HeaderEntry> {
    headers.get(name).map(<[_]>::to_vec).unwrap_or_default()
}

pub fn header_names(headers: &Headers) -> Vec<String> {
    headers.names().map(str::to_string).collect()
}
