use crate::util::{equals_ignore_case, normalize_lower};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One occurrence of a header. `key` keeps the on-the-wire casing and may be
/// omitted, in which case the edge derives it from the map name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub value: String,
}

impl HeaderEntry {
    pub fn new<K: Into<String>, V: Into<String>>(key: K, value: V) -> Self {
        Self {
            key: Some(key.into()),
            value: value.into(),
        }
    }

    pub fn value_only<V: Into<String>>(value: V) -> Self {
        Self {
            key: None,
            value: value.into(),
        }
    }
}

/// Edge header representation: lowercase name to the ordered occurrences of
/// that header. Insertion order is preserved on output.
///
/// A missing name, a name mapped to an empty list and a name whose first
/// value is an empty string are three different states; [`Headers::get`]
/// and [`Headers::first_value`] keep them apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Headers {
    entries: IndexMap<String, Vec<HeaderEntry>>,
    // Set when the request carried no `headers` attribute at all.
    #[serde(skip)]
    omitted: bool,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
            omitted: false,
        }
    }

    /// Stand-in for a request whose `headers` attribute was missing.
    pub(crate) fn omitted() -> Self {
        Self {
            entries: IndexMap::new(),
            omitted: true,
        }
    }

    /// True while the collection stands in for a missing attribute and
    /// nothing has been added to it.
    pub(crate) fn is_omitted(&self) -> bool {
        self.omitted && self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let lowered = normalize_lower(name);
        self.entries.get_index_of(lowered.as_str()).or_else(|| {
            self.entries
                .keys()
                .position(|existing| equals_ignore_case(existing, name))
        })
    }

    pub fn get(&self, name: &str) -> Option<&[HeaderEntry]> {
        self.position(name)
            .and_then(|index| self.entries.get_index(index))
            .map(|(_, values)| values.as_slice())
    }

    /// First value of `name`, or `None` when the header is absent or carries
    /// no occurrences.
    pub fn first_value(&self, name: &str) -> Option<&str> {
        self.get(name)
            .and_then(|values| values.first())
            .map(|entry| entry.value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Replaces every occurrence of `name`. The stored name is lowercased and
    /// keeps the position of any header it replaces.
    pub fn set<S: AsRef<str>>(&mut self, name: S, values: Vec<HeaderEntry>) {
        let name = name.as_ref();
        let lowered = normalize_lower(name);
        match self.position(name) {
            Some(index) => {
                self.entries.shift_remove_index(index);
                self.entries.shift_insert(index, lowered, values);
            }
            None => {
                self.entries.insert(lowered, values);
            }
        }
    }

    pub fn set_single<S, K, V>(&mut self, name: S, key: K, value: V)
    where
        S: AsRef<str>,
        K: Into<String>,
        V: Into<String>,
    {
        self.set(name, vec![HeaderEntry::new(key, value)]);
    }

    pub fn append<S: AsRef<str>>(&mut self, name: S, entry: HeaderEntry) {
        let name = name.as_ref();
        match self.position(name) {
            Some(index) => {
                if let Some((_, values)) = self.entries.get_index_mut(index) {
                    values.push(entry);
                }
            }
            None => {
                self.entries.insert(normalize_lower(name), vec![entry]);
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Vec<HeaderEntry>> {
        let index = self.position(name)?;
        self.entries
            .shift_remove_index(index)
            .map(|(_, values)| values)
    }

    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str) -> bool,
    {
        self.entries.retain(|name, _| keep(name));
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[HeaderEntry])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<HeaderEntry>)> for Headers {
    fn from_iter<I: IntoIterator<Item = (S, Vec<HeaderEntry>)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (name, values) in iter {
            let name: String = name.into();
            headers.set(name, values);
        }
        headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
