//! ANSI colors used by the console.

/// Role of a piece of text on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Menu borders, account details
    Frame,
    /// Menu titles
    Title,
    /// Input prompts
    Prompt,
    /// Completed operations
    Success,
    /// Rejections and warnings
    Failure,
}

impl Tone {
    fn code(self) -> &'static str {
        match self {
            Tone::Frame | Tone::Failure => "\x1b[35m",
            Tone::Title => "\x1b[37m",
            Tone::Prompt => "\x1b[36m",
            Tone::Success => "\x1b[34m",
        }
    }
}

const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn paint(&self, tone: Tone, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", tone.code(), text, RESET)
        } else {
            text.to_string()
        }
    }
}
