/// Query parameter of the redirect link that carries the wrapped target URL
pub const TARGET_PARAM: &str = "u";

/// Click identifier appended by Facebook to outbound links
pub const TRACKER_PARAM: &str = "fbclid";

/// Prompt shown before each line in interactive mode
pub const INTERACTIVE_PROMPT: &str = "Enter link: ";

/// Prompt shown before each line in quiet mode
pub const QUIET_PROMPT: &str = "";

/// Prefixes of the two stderr lines reporting a parse failure
pub const ERROR_URL_PREFIX: &str = "ERROR: Failed to parse URL";
pub const ERROR_QUERY_PREFIX: &str = "ERROR: Extracted query";
