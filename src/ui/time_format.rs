use crate::core::models::Activity;

/// `H:MM` becomes `HH:MM`; anything that is not two colon-separated parts is
/// returned unchanged.
pub fn format_time_string(time: &str) -> String {
    if time.is_empty() {
        return String::new();
    }
    let parts: Vec<&str> = time.split(':').collect();
    if parts.len() != 2 {
        return time.to_string();
    }
    format!("{:0>2}:{:0>2}", parts[0], parts[1])
}

pub fn format_range(start: &str, end: &str) -> String {
    format!("{} ~ {}", format_time_string(start), format_time_string(end))
}

/// Display range for a cell.
///
/// One distinct start and one distinct end give that exact range; otherwise
/// the earliest start through the latest end.
pub fn cell_time_range(activities: &[Activity]) -> String {
    let mut starts: Vec<&str> = activities
        .iter()
        .map(|a| a.start.as_deref().unwrap_or(""))
        .collect();
    let mut ends: Vec<&str> = activities.iter().map(Activity::end_time).collect();
    starts.sort_unstable();
    starts.dedup();
    ends.sort_unstable();
    ends.dedup();

    let earliest = starts.first().copied().unwrap_or("");
    let latest = ends.last().copied().unwrap_or("");
    format_range(earliest, latest)
}
