use crate::errors::Result;

pub enum FlowCtrl {
    Continue,
    Finish,
    Abort,
}

/// One screen of the shell: draws itself and reacts to a line of input.
pub trait Flow {
    fn render(&mut self) -> Result<()>;
    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl>;
}

impl<F: Flow + ?Sized> Flow for &mut F {
    fn render(&mut self) -> Result<()> {
        (**self).render()
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        (**self).handle_input(input)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigState {
    ShowTable,   // config table plus Y/N
    SelectId,    // row to edit
    ShowCurrent, // description and current value
    AskNewValue,
    Done,
}

/// Top-level shell command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    Previous,
    Next,
    Today,
    Print,
    Config,
    Help,
    Exit,
}

impl ShellCommand {
    pub fn parse(word: &str) -> Option<Self> {
        Some(match word.to_ascii_lowercase().as_str() {
            "prev" | "p" => Self::Previous,
            "next" | "n" => Self::Next,
            "today" | "t" => Self::Today,
            "print" => Self::Print,
            "config" => Self::Config,
            "help" | "?" => Self::Help,
            "exit" | "quit" => Self::Exit,
            _ => return None,
        })
    }

    pub fn help_lines() -> [&'static str; 8] {
        [
            "prev | p          previous week",
            "next | n          next week",
            "today | t         back to this week",
            "print             export the current table as HTML",
            "config            view and edit settings",
            "help              this list",
            "exit              leave",
            "ctrl+left / ctrl+right / ctrl+home (or the raw key sequences) also navigate",
        ]
    }
}
