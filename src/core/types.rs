use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use crate::extensions::string::DateSeparators;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

/// Calendar day encoded as `YYYYMMDD`, the key the backend stores dates under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(pub u32);

impl DateKey {
    pub fn from_date(date: NaiveDate) -> Self {
        let year = date.year().max(0) as u32;
        DateKey(year * 10_000 + date.month() * 100 + date.day())
    }

    pub fn year(self) -> i32 {
        (self.0 / 10_000) as i32
    }

    pub fn month(self) -> u32 {
        (self.0 % 10_000) / 100
    }

    pub fn day(self) -> u32 {
        self.0 % 100
    }

    /// `None` when the digits do not name a real calendar day.
    pub fn to_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year(), self.month(), self.day())
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        DateKey::from_date(date)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08}", self.0)
    }
}

/// Monday-first day columns of the timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
pub enum DayOfWeek {
    #[strum(serialize = "월요일", to_string = "월요일")]
    Mon,
    #[strum(serialize = "화요일", to_string = "화요일")]
    Tue,
    #[strum(serialize = "수요일", to_string = "수요일")]
    Wed,
    #[strum(serialize = "목요일", to_string = "목요일")]
    Thu,
    #[strum(serialize = "금요일", to_string = "금요일")]
    Fri,
    #[strum(serialize = "토요일", to_string = "토요일")]
    Sat,
    #[strum(serialize = "일요일", to_string = "일요일")]
    Sun,
}

impl DayOfWeek {
    /// Column index, 0 = Monday.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        DayOfWeek::iter().nth(index)
    }

    /// One-syllable header form used in `6.3(월)`.
    pub fn abbrev(self) -> &'static str {
        match self {
            DayOfWeek::Mon => "월",
            DayOfWeek::Tue => "화",
            DayOfWeek::Wed => "수",
            DayOfWeek::Thu => "목",
            DayOfWeek::Fri => "금",
            DayOfWeek::Sat => "토",
            DayOfWeek::Sun => "일",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Date(pub NaiveDate);

#[derive(Copy, Clone, Debug, EnumIterDerive, AsRefStr, EnumString)]
pub enum DateFormat {
    #[strum(serialize = "%Y-%m-%d")]
    YmdDash,
    #[strum(serialize = "%Y%m%d")]
    Compact,
    #[strum(serialize = "%m-%d")]
    MdDash,
}

impl Date {
    pub fn usage() -> String {
        let today = Local::now().date_naive();
        let formats = DateFormat::iter()
            .map(|df| today.format(df.as_ref()).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("Supported formats: {}", formats)
    }

    pub fn try_from_str(input: &str) -> Result<Self> {
        let input = input.to_dash_separators();
        let current_year = Local::now().date_naive().year();

        for f in DateFormat::iter() {
            let candidate = match f {
                DateFormat::MdDash => format!("{current_year}-{input}"),
                _ => input.clone(),
            };
            let format = match f {
                DateFormat::MdDash => DateFormat::YmdDash,
                other => other,
            };
            if let Ok(date) = NaiveDate::parse_from_str(&candidate, format.as_ref()) {
                return Ok(Date(date));
            }
        }

        Err(Error::Parse(format!(
            "Invalid date format: '{}'. {}",
            input,
            Self::usage()
        )))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum BoolFormat {
    #[strum(serialize = "true", serialize = "True", to_string = "True")]
    TextTrue,

    #[strum(serialize = "false", serialize = "False", to_string = "False")]
    TextFalse,
}

impl BoolFormat {
    #[inline]
    fn to_bool(self) -> bool {
        matches!(self, BoolFormat::TextTrue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        match BoolFormat::from_str(s.trim()) {
            Ok(fmt) => Ok(Bool(fmt.to_bool())),
            Err(_) => Err(Error::Parse(format!(
                "Invalid string value for boolean: '{}'. Valid values: {}",
                s,
                valid_csv::<BoolFormat>()
            ))),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Bool, <D as Deserializer<'de>>::Error> {
        let b = String::deserialize(deserializer)?;
        Bool::try_from_str(&b).map_err(serde::de::Error::custom)
    }
}
