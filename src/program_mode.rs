use crate::common::constants::{INTERACTIVE_PROMPT, QUIET_PROMPT};

/// Prompt and output style for the read loop, selected by `--quiet`.
#[derive(Clone, Copy)]
pub struct ProgramMode {
    pub prompt: &'static str,
    pub formatter: fn(&str) -> String,
}

impl ProgramMode {
    pub fn quiet() -> Self {
        Self {
            prompt: QUIET_PROMPT,
            formatter: plain,
        }
    }

    pub fn interactive() -> Self {
        Self {
            prompt: INTERACTIVE_PROMPT,
            formatter: padded,
        }
    }

    pub fn from_quiet_flag(quiet: bool) -> Self {
        if quiet {
            Self::quiet()
        } else {
            Self::interactive()
        }
    }

    pub fn format(&self, text: &str) -> String {
        (self.formatter)(text)
    }
}

fn plain(text: &str) -> String {
    text.to_string()
}

/// Blank line above and below, so results stand out from typed input.
fn padded(text: &str) -> String {
    format!("\n{}\n", text)
}
