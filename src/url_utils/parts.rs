use std::fmt;

/// A URL split into its five generic components.
///
/// Splitting never fails and never normalizes: every component keeps the
/// spelling it had in the input, so `UrlParts::split(s).to_string() == s`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParts {
    scheme: Option<String>,
    netloc: Option<String>,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl UrlParts {
    pub fn split(raw: &str) -> Self {
        let mut rest = raw;

        let mut scheme = None;
        if let Some((prefix, after)) = rest.split_once(':') {
            if is_scheme(prefix) {
                scheme = Some(prefix.to_string());
                rest = after;
            }
        }

        let mut netloc = None;
        if let Some(after) = rest.strip_prefix("//") {
            let end = after
                .find(|c: char| matches!(c, '/' | '?' | '#'))
                .unwrap_or(after.len());
            netloc = Some(after[..end].to_string());
            rest = &after[end..];
        }

        let (rest, fragment) = match rest.split_once('#') {
            Some((before, fragment)) => (before, Some(fragment.to_string())),
            None => (rest, None),
        };

        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (rest, None),
        };

        Self {
            scheme,
            netloc,
            path: path.to_string(),
            query,
            fragment,
        }
    }

    /// Returns a copy of these parts with only the query replaced.
    /// `None` drops the `?` marker entirely.
    pub fn with_query(&self, query: Option<String>) -> Self {
        Self {
            query,
            ..self.clone()
        }
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    pub fn netloc(&self) -> Option<&str> {
        self.netloc.as_deref()
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}

impl fmt::Display for UrlParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{}:", scheme)?;
        }
        if let Some(netloc) = &self.netloc {
            write!(f, "//{}", netloc)?;
        }
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{}", query)?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}
