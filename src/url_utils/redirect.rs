use log::debug;

use super::parts::UrlParts;
use super::query::parse_query;
use crate::common::constants::{TARGET_PARAM, TRACKER_PARAM};
use crate::error::{ParseErrorKind, QueryStringParsingError, UnwrapResult};

/// Pulls the wrapped destination out of a redirect link.
///
/// The returned URL still carries its own tracker parameters. A blank
/// `u=` counts as missing.
pub fn extract_url(raw_url: &str) -> UnwrapResult<String> {
    let url = UrlParts::split(raw_url);
    let query = parse_query(&url)?;

    match query.first(TARGET_PARAM) {
        Some(target) if !target.is_empty() => {
            debug!("Extracted '{}' from {}", target, raw_url);
            Ok(target.to_string())
        }
        _ => Err(QueryStringParsingError::new(
            url.to_string(),
            url.query().unwrap_or_default(),
            ParseErrorKind::MissingParameter {
                key: TARGET_PARAM.to_string(),
            },
        )),
    }
}

/// Drops the tracker parameter from `dirty_url`, leaving every other
/// component untouched.
pub fn clean_url(dirty_url: &str) -> UnwrapResult<String> {
    let url = UrlParts::split(dirty_url);
    let mut query = parse_query(&url)?;

    if let Some(values) = query.remove(TRACKER_PARAM) {
        debug!("Stripped {} '{}' value(s) from {}", values.len(), TRACKER_PARAM, dirty_url);
    }

    let encoded = query.encode();
    let cleaned = url.with_query((!encoded.is_empty()).then_some(encoded));

    Ok(cleaned.to_string())
}

/// Turns a Facebook redirect link into the tracker-free destination URL.
pub fn decrypt_url(raw_url: &str) -> UnwrapResult<String> {
    let dirty_url = extract_url(raw_url)?;
    clean_url(&dirty_url)
}
