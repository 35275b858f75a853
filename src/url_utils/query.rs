use std::borrow::Cow;

use log::trace;
use url::form_urlencoded;

use super::parts::UrlParts;
use crate::error::{ParseErrorKind, QueryStringParsingError, UnwrapResult};

/// Decoded query parameters, keyed in order of first appearance.
///
/// A key that repeats in the query keeps all of its values, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMap {
    entries: Vec<(String, Vec<String>)>,
}

impl QueryMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(value),
            None => self.entries.push((key, vec![value])),
        }
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
    }

    pub fn first(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, values)| (k.as_str(), values.as_slice()))
    }

    /// Serializes as `application/x-www-form-urlencoded`, one pair per value.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, values) in self.iter() {
            for value in values {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }
}

/// Strictly parses the query of `url`.
///
/// Every `&`-separated field must be `key=value`, and every `%` must start a
/// valid escape. An absent or empty query gives an empty map.
pub fn parse_query(url: &UrlParts) -> UnwrapResult<QueryMap> {
    let url_query = url.query().unwrap_or_default();

    parse_fields(url_query).map_err(|kind| {
        QueryStringParsingError::new(url.to_string(), url_query, kind)
    })
}

fn parse_fields(query: &str) -> Result<QueryMap, ParseErrorKind> {
    let mut map = QueryMap::new();
    if query.is_empty() {
        return Ok(map);
    }

    for field in query.split('&') {
        // Only the first `=` separates; later ones belong to the value.
        let (key, value) = field.split_once('=').ok_or_else(|| ParseErrorKind::BadField {
            field: field.to_string(),
        })?;
        let key = decode_component(key, field)?;
        let value = decode_component(value, field)?;
        trace!("Parsed query field '{}' = '{}'", key, value);
        map.append(key, value);
    }

    Ok(map)
}

fn decode_component(raw: &str, field: &str) -> Result<String, ParseErrorKind> {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return Err(ParseErrorKind::InvalidEscape {
                    field: field.to_string(),
                });
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(Cow::into_owned)
        .map_err(|_| ParseErrorKind::InvalidUtf8 {
            field: field.to_string(),
        })
}
