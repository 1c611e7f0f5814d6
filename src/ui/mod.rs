pub mod ansi;
pub mod ascii;
pub mod chrome;
pub mod display_manager;
pub mod html;
pub mod palette;
mod table_printer;
pub mod time_format;
pub mod view;
mod width_util;

pub use table_printer::TablePrinter;
