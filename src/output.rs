use crate::ansi;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutFrame {
    /// Regular "in-game" text line
    Line(String),
    /// System text from the game engine, not world related
    System(String),
    /// Room description produced by `look`
    RoomView(String),
    /// The session is over
    Fatal(String),
}

impl OutFrame {
    pub fn text(&self) -> &str {
        match self {
            OutFrame::Line(s) | OutFrame::System(s) | OutFrame::RoomView(s) | OutFrame::Fatal(s) => s,
        }
    }

    /// Render for a terminal, optionally with ANSI colour.
    pub fn render(&self, color: bool) -> String {
        if !color {
            return self.text().to_string();
        }

        match self {
            OutFrame::Line(s) => s.clone(),
            OutFrame::System(s) => ansi::paint(s, "yellow", &[]),
            OutFrame::RoomView(s) => ansi::paint(s, "cyan", &[]),
            OutFrame::Fatal(s) => ansi::paint(s, "red", &["bold"]),
        }
    }
}

/// Collects the frames produced while one command runs. The console loop drains it afterwards.
#[derive(Debug, Default)]
pub struct OutputHandle {
    frames: Vec<OutFrame>,
}

impl OutputHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, s: impl Into<String>) {
        self.frames.push(OutFrame::Line(s.into()));
    }

    pub fn system(&mut self, s: impl Into<String>) {
        self.frames.push(OutFrame::System(s.into()));
    }

    pub fn room_view(&mut self, s: impl Into<String>) {
        self.frames.push(OutFrame::RoomView(s.into()));
    }

    pub fn fatal(&mut self, s: impl Into<String>) {
        self.frames.push(OutFrame::Fatal(s.into()));
    }

    pub fn frames(&self) -> &[OutFrame] {
        &self.frames
    }

    /// Take all pending frames, leaving the handle empty.
    pub fn drain(&mut self) -> Vec<OutFrame> {
        std::mem::take(&mut self.frames)
    }

    /// All pending text joined by newlines.
    pub fn text(&self) -> String {
        self.frames.iter().map(OutFrame::text).collect::<Vec<_>>().join("\n")
    }
}

/// "a", "a and b", "a, b and c"; "nothing" for an empty list.
pub fn itemize<S: AsRef<str>>(parts: &[S]) -> String {
    match parts {
        [] => "nothing".to_string(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head = init.iter().map(|s| s.as_ref()).collect::<Vec<_>>().join(", ");
            format!("{head} and {}", last.as_ref())
        }
    }
}
