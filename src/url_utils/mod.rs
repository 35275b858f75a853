mod parts;
mod query;
mod redirect;

pub use parts::UrlParts;
pub use query::{parse_query, QueryMap};
pub use redirect::{clean_url, decrypt_url, extract_url};
