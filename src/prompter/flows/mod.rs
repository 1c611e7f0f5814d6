pub mod config_edit;
pub mod timetable_flow;
