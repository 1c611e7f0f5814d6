use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Home,
}

/// Week movement a shortcut asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    PreviousWeek,
    NextWeek,
    CurrentWeek,
}

/// A key press with its modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub key: Key,
    pub ctrl: bool,
    pub meta: bool,
}

impl Shortcut {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
        }
    }

    pub fn ctrl(key: Key) -> Self {
        Self {
            ctrl: true,
            ..Self::new(key)
        }
    }

    pub fn meta(key: Key) -> Self {
        Self {
            meta: true,
            ..Self::new(key)
        }
    }

    /// Accepts `ctrl+left`, `cmd+right`, `meta+home` style tokens and xterm
    /// CSI sequences such as `ESC[1;5D` (either the raw escape byte or a
    /// literal `^[`). Returns `None` for anything that is not an arrow or Home.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if let Some(rest) = token
            .strip_prefix("\x1B[")
            .or_else(|| token.strip_prefix("^[["))
        {
            return Self::parse_csi(rest);
        }
        Self::parse_named(token)
    }

    fn parse_named(token: &str) -> Option<Self> {
        let lower = token.to_ascii_lowercase();
        let mut parts: Vec<&str> = lower.split('+').map(str::trim).collect();
        let key = match parts.pop()? {
            "left" | "arrowleft" => Key::Left,
            "right" | "arrowright" => Key::Right,
            "home" => Key::Home,
            _ => return None,
        };
        let mut shortcut = Self::new(key);
        for modifier in parts {
            match modifier {
                "ctrl" | "control" => shortcut.ctrl = true,
                "cmd" | "meta" | "command" | "super" => shortcut.meta = true,
                _ => return None,
            }
        }
        Some(shortcut)
    }

    /// `D`, `C`, `H` with an optional `1;<mod>` prefix; xterm encodes the
    /// modifier as 1 + bitmask (ctrl = 4, meta = 8).
    fn parse_csi(rest: &str) -> Option<Self> {
        let final_byte = rest.chars().last()?;
        let key = match final_byte {
            'D' => Key::Left,
            'C' => Key::Right,
            'H' => Key::Home,
            _ => return None,
        };
        let params = &rest[..rest.len() - final_byte.len_utf8()];
        let mut shortcut = Self::new(key);
        if params.is_empty() {
            return Some(shortcut);
        }
        let (_, modifier) = params.split_once(';')?;
        let bits = modifier.parse::<u8>().ok()?.checked_sub(1)?;
        shortcut.ctrl = bits & 4 != 0;
        shortcut.meta = bits & 8 != 0;
        Some(shortcut)
    }

    /// Only Ctrl or Meta combinations navigate.
    pub fn action(&self) -> Option<NavAction> {
        if !(self.ctrl || self.meta) {
            return None;
        }
        Some(match self.key {
            Key::Left => NavAction::PreviousWeek,
            Key::Right => NavAction::NextWeek,
            Key::Home => NavAction::CurrentWeek,
        })
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            write!(f, "ctrl+")?;
        }
        if self.meta {
            write!(f, "meta+")?;
        }
        let key = match self.key {
            Key::Left => "left",
            Key::Right => "right",
            Key::Home => "home",
        };
        write!(f, "{key}")
    }
}
