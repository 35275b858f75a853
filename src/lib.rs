//! Unwraps Facebook redirect links (`l.facebook.com/l.php?u=...`) and strips
//! the `fbclid` tracker from the recovered destination.

pub mod cli_args;
pub mod common;
pub mod error;
pub mod program_mode;
pub mod session;
pub mod url_fetcher;
pub mod url_utils;

pub use error::{ParseErrorKind, QueryStringParsingError};
pub use url_utils::{clean_url, decrypt_url, extract_url, parse_query, QueryMap, UrlParts};
