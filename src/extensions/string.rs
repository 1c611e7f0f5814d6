pub trait DateSeparators {
    /// Canonical `-` separated form of a typed date: whitespace is dropped,
    /// `/` and `.` become `-`, and a trailing separator goes away, so
    /// `2024. 6. 5.` and `2024/06/05` both read as dashed dates.
    fn to_dash_separators(&self) -> String;
}

impl DateSeparators for str {
    fn to_dash_separators(&self) -> String {
        let dashed: String = self
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| if c == '/' || c == '.' { '-' } else { c })
            .collect();
        dashed.trim_end_matches('-').to_string()
    }
}
