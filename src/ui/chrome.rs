use crate::ui::ansi::{
    CLEAR_LINE_REST, CLEAR_SCREEN, CURSOR_HOME, CURSOR_UP_ONE, FG_LIGHT_GRAY, FG_RED,
    PROMPT_STYLE, STYLE_BOLD, STYLE_ITALIC, STYLE_RESET,
};
use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

const INNER_WIDTH: usize = 50;

/// Screen-level helpers (banner, clearing, centering prompts).
#[derive(Debug, Default, Clone)]
pub struct UiChrome {
    util: WidthUtil,
}

impl UiChrome {
    pub fn new() -> Self {
        Self {
            util: WidthUtil::default(),
        }
    }

    pub fn print_banner(&self) {
        let version = env!("CARGO_PKG_VERSION");
        let title = format!(
            "{STYLE_BOLD}T I M E T A B L E{STYLE_RESET} {FG_LIGHT_GRAY}(v{version}){STYLE_RESET}"
        );
        let subtitle = format!("{STYLE_ITALIC}주간 시간표{STYLE_RESET}");
        print!("{}", self.boxed(&[&title, &subtitle]));
    }

    /// Boxed message shown when the app cannot start; the caller decides
    /// where it goes.
    pub fn error_state(&self, message: &str) -> String {
        let heading = format!("{STYLE_BOLD}{FG_RED}시간표를 불러올 수 없습니다{STYLE_RESET}");
        self.boxed(&[&heading, message])
    }

    fn boxed(&self, lines: &[&str]) -> String {
        let width = lines
            .iter()
            .map(|l| self.util.visible_width(l) + 4)
            .fold(INNER_WIDTH, usize::max);
        let mut out = format!("╭{}╮\n", "─".repeat(width));
        out.push_str(&format!("│{}│\n", " ".repeat(width)));
        for line in lines {
            out.push_str(&format!("│{}│\n", self.center_in_box(line, width)));
        }
        out.push_str(&format!("│{}│\n", " ".repeat(width)));
        out.push_str(&format!("╰{}╯\n", "─".repeat(width)));
        out
    }

    pub fn clear_screen(&self) {
        print!("{CLEAR_SCREEN}{CURSOR_HOME}");
        let _ = io::stdout().flush();
    }

    pub fn print_centered_prefix_plain(&self, prefix: &str, box_width: usize) {
        let left = self.util.center_pad(box_width);
        print!("{}{}", " ".repeat(left), prefix);
        let _ = io::stdout().flush();
    }

    pub fn print_prompt(&self, prompt: &str) {
        self.print_prompt_padding_line();
        print!("{PROMPT_STYLE}{prompt}{CLEAR_LINE_REST}{STYLE_RESET}\n");
        print!("{PROMPT_STYLE}{CLEAR_LINE_REST}{STYLE_RESET}");
        let column = self.util.visible_width(prompt) + 1;
        print!("{CURSOR_UP_ONE}\x1B[{column}G{PROMPT_STYLE}");
        let _ = io::stdout().flush();
    }

    pub fn println_centered_in_box(&self, s: &str, box_width: usize) {
        println!("{}", self.format_centered_line(s, box_width));
    }

    pub fn format_centered_line(&self, s: &str, box_width: usize) -> String {
        let left = self.util.center_pad(box_width);
        let inner_pad = box_width.saturating_sub(self.util.visible_width(s)) / 2;
        format!("{}{}{}", " ".repeat(left), " ".repeat(inner_pad), s)
    }

    pub fn print_prompt_bottom_padding(&self) {
        self.print_prompt_padding_line();
        let _ = io::stdout().flush();
    }

    fn print_prompt_padding_line(&self) {
        print!("{PROMPT_STYLE}{CLEAR_LINE_REST}{STYLE_RESET}\n");
    }

    fn center_in_box(&self, content: &str, width: usize) -> String {
        let content_width = self.util.visible_width(content);
        if content_width >= width {
            return content.to_string();
        }
        let left = (width - content_width) / 2;
        let right = width - content_width - left;
        format!("{}{}{}", " ".repeat(left), content, " ".repeat(right))
    }
}
