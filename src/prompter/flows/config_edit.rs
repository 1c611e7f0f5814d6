use crate::config::ConfigKey;
use crate::core::context::AppContext;
use crate::core::types::Date;
use crate::errors::Result;
use crate::logging::LogTarget;
use crate::prompter::models::{ConfigState, Flow, FlowCtrl};
use crate::ui::ansi::STYLE_RESET;
use crate::ui::chrome::UiChrome;
use crate::ui::display_manager::DisplayManager;
use std::io::Write;
use std::str::FromStr;

type ConfigRows = Vec<(String, String, String)>;

pub struct ConfigEditFlow<'a> {
    ctx: &'a mut AppContext,
    dm: DisplayManager,
    chrome: UiChrome,
    state: ConfigState,
    rows_cache: ConfigRows,
    selected_idx: Option<usize>,
    frame_width: usize,
    changed: bool,
}

impl<'a> ConfigEditFlow<'a> {
    pub fn new(ctx: &'a mut AppContext) -> Self {
        let rows = ctx.config.rows();
        Self {
            ctx,
            dm: DisplayManager::new(),
            chrome: UiChrome::new(),
            state: ConfigState::ShowTable,
            rows_cache: rows,
            selected_idx: None,
            frame_width: 60,
            changed: false,
        }
    }

    pub fn state(&self) -> ConfigState {
        self.state.clone()
    }

    /// Whether any value was written during this flow.
    pub fn changed(&self) -> bool {
        self.changed
    }

    #[cfg(test)]
    pub(crate) fn selected_index(&self) -> Option<usize> {
        self.selected_idx
    }

    fn selected_row(&self) -> Option<(&str, &str, &str)> {
        self.selected_idx
            .and_then(|i| self.rows_cache.get(i))
            .map(|(k, d, v)| (k.as_str(), d.as_str(), v.as_str()))
    }

    fn possible_options(&self) -> Option<String> {
        let (key, _, _) = self.selected_row()?;
        match ConfigKey::from_str(key).ok()? {
            ConfigKey::BatchFetchEnabled => {
                Some("True: fetch the whole week at once | False: one request per day".into())
            }
            ConfigKey::FileLoggingEnabled => {
                Some("True: write the session log file | False: console only".into())
            }
            ConfigKey::StartDate => Some(format!("{} (empty for the current week)", Date::usage())),
            ConfigKey::DataFile | ConfigKey::TitlePrefix => None,
        }
    }

    fn render_prompt(&self, message: &str) {
        self.chrome
            .println_centered_in_box(message, self.frame_width);
        self.chrome
            .print_centered_prefix_plain("> ", self.frame_width);
    }

    fn render_new_value_prompt(&self, show_details: bool) {
        if show_details {
            if let Some((_, desc, val)) = self.selected_row() {
                self.chrome.println_centered_in_box(desc, self.frame_width);
                self.chrome
                    .println_centered_in_box(&format!("Current value: {val}"), self.frame_width);
            }
        }
        if let Some(opts) = self.possible_options() {
            self.chrome
                .println_centered_in_box(&format!("Possible options: {opts}"), self.frame_width);
        }
        self.render_prompt("Enter new value: ");
    }

    fn render_table(&mut self) {
        self.chrome.clear_screen();
        self.frame_width = self.dm.display_config_centered(&self.ctx.config);
        self.render_prompt("Would you like to edit a setting? (Y/N)");
    }
}

impl<'a> Flow for ConfigEditFlow<'a> {
    fn render(&mut self) -> Result<()> {
        match self.state {
            ConfigState::ShowTable => self.render_table(),
            ConfigState::SelectId => self.render_prompt(&format!(
                "Enter ID (0..{}): ",
                self.rows_cache.len().saturating_sub(1)
            )),
            ConfigState::ShowCurrent => {
                self.render_new_value_prompt(true);
                self.state = ConfigState::AskNewValue;
            }
            ConfigState::AskNewValue => self.render_new_value_prompt(false),
            ConfigState::Done => {}
        }
        Ok(())
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        print!("{STYLE_RESET}");
        let _ = std::io::stdout().flush();
        match self.state {
            ConfigState::ShowTable => Ok(self.handle_table_input(input)),
            ConfigState::SelectId => Ok(self.handle_select_id_input(input)),
            ConfigState::ShowCurrent => Ok(FlowCtrl::Continue),
            ConfigState::AskNewValue => {
                self.apply_config_change(input);
                Ok(FlowCtrl::Continue)
            }
            ConfigState::Done => Ok(FlowCtrl::Finish),
        }
    }
}

impl<'a> ConfigEditFlow<'a> {
    fn handle_table_input(&mut self, input: &str) -> FlowCtrl {
        match input {
            "y" | "Y" => self.state = ConfigState::SelectId,
            "n" | "N" => {
                self.state = ConfigState::Done;
                return FlowCtrl::Finish;
            }
            _ => self
                .chrome
                .println_centered_in_box("Please enter Y or N.", self.frame_width),
        }
        FlowCtrl::Continue
    }

    fn handle_select_id_input(&mut self, input: &str) -> FlowCtrl {
        let len = self.rows_cache.len();
        match input.trim().parse::<usize>() {
            Ok(v) if v < len => {
                self.selected_idx = Some(v);
                self.state = ConfigState::ShowCurrent;
            }
            _ => self.chrome.println_centered_in_box(
                &format!("Invalid ID. Please enter 0..{}.", len.saturating_sub(1)),
                self.frame_width,
            ),
        }
        FlowCtrl::Continue
    }

    fn apply_config_change(&mut self, new_val: &str) {
        let Some((key, _, _)) = self.selected_row() else {
            self.state = ConfigState::ShowTable;
            return;
        };
        let key = key.to_string();

        match self.ctx.config.set(&key, new_val) {
            Ok((old, new)) => {
                self.chrome
                    .println_centered_in_box(&format!("Updated {key}."), self.frame_width);
                self.log_config_change(&key, &old, &new);
                self.rows_cache = self.ctx.config.rows();
                self.changed = true;
                self.state = ConfigState::ShowTable;
            }
            Err(e) => {
                self.chrome
                    .println_centered_in_box(&format!("Error: {e}"), self.frame_width);
                self.state = ConfigState::AskNewValue;
            }
        }
    }

    /// Turning file logging off still records the change that did it.
    fn log_config_change(&self, key: &str, old: &str, new: &str) {
        let logger = &self.ctx.logger;
        let file_enabled = self.ctx.config.file_logging_enabled();
        if file_enabled {
            logger.set_file_logging_enabled(true);
        }
        logger.info(
            format!("Config '{key}' updated: '{old}' -> '{new}'"),
            LogTarget::FileOnly,
        );
        logger.set_file_logging_enabled(file_enabled);
    }
}
