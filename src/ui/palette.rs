use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive};

/// Ten pastel tag colors; the string form is the CSS class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumIterDerive)]
pub enum PastelColor {
    #[strum(to_string = "pastel-pink")]
    Pink,
    #[strum(to_string = "pastel-blue")]
    Blue,
    #[strum(to_string = "pastel-green")]
    Green,
    #[strum(to_string = "pastel-yellow")]
    Yellow,
    #[strum(to_string = "pastel-purple")]
    Purple,
    #[strum(to_string = "pastel-orange")]
    Orange,
    #[strum(to_string = "pastel-teal")]
    Teal,
    #[strum(to_string = "pastel-indigo")]
    Indigo,
    #[strum(to_string = "pastel-rose")]
    Rose,
    #[strum(to_string = "pastel-cyan")]
    Cyan,
}

pub const PALETTE_SIZE: usize = 10;

impl PastelColor {
    pub const RESET: &'static str = crate::csi!("0m");

    /// 256-color foreground closest to the pastel tone.
    pub fn ansi_fg(self) -> &'static str {
        match self {
            PastelColor::Pink => crate::csi!("38;5;218m"),
            PastelColor::Blue => crate::csi!("38;5;153m"),
            PastelColor::Green => crate::csi!("38;5;157m"),
            PastelColor::Yellow => crate::csi!("38;5;229m"),
            PastelColor::Purple => crate::csi!("38;5;183m"),
            PastelColor::Orange => crate::csi!("38;5;216m"),
            PastelColor::Teal => crate::csi!("38;5;116m"),
            PastelColor::Indigo => crate::csi!("38;5;147m"),
            PastelColor::Rose => crate::csi!("38;5;211m"),
            PastelColor::Cyan => crate::csi!("38;5;159m"),
        }
    }

    /// Background and text colors used by the printable document.
    pub fn css(self) -> (&'static str, &'static str) {
        match self {
            PastelColor::Pink => ("#ffd6e0", "#8a3050"),
            PastelColor::Blue => ("#d6e8ff", "#2b4f86"),
            PastelColor::Green => ("#d9f5dd", "#2d6a3a"),
            PastelColor::Yellow => ("#fff4c2", "#7a6310"),
            PastelColor::Purple => ("#eadcff", "#5b3a8c"),
            PastelColor::Orange => ("#ffe2c6", "#8a4a12"),
            PastelColor::Teal => ("#ccf2ee", "#1f6b63"),
            PastelColor::Indigo => ("#dcdfff", "#343d8f"),
            PastelColor::Rose => ("#ffd9d9", "#8c2f2f"),
            PastelColor::Cyan => ("#d2f6ff", "#1d6475"),
        }
    }

    pub fn paint<S: AsRef<str>>(self, s: S) -> String {
        format!("{}{}{}", self.ansi_fg(), s.as_ref(), Self::RESET)
    }
}

/// 32-bit `h * 31 + unit` over UTF-16 code units, wrapping.
pub fn activity_hash(name: &str) -> i32 {
    name.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

/// Same name, same color, every time. Different names may collide.
pub fn color_for_activity(name: &str) -> PastelColor {
    let index = activity_hash(name).unsigned_abs() as usize % PALETTE_SIZE;
    PastelColor::iter().nth(index).unwrap_or(PastelColor::Pink)
}
