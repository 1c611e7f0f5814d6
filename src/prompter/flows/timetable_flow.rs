use std::io::{self, Write};
use std::sync::Arc;

use tokio::runtime::Runtime;

use crate::controller::shortcut::Shortcut;
use crate::controller::{NavOutcome, TimetableController};
use crate::core::context::AppContext;
use crate::errors::Result;
use crate::loader::WeekLoader;
use crate::loader::source::ActivitySource;
use crate::logging::LogTarget;
use crate::prompter::flows::config_edit::ConfigEditFlow;
use crate::prompter::models::{Flow, FlowCtrl, ShellCommand};
use crate::prompter::prompter::Prompter;
use crate::ui::ansi::STYLE_RESET;
use crate::ui::chrome::UiChrome;
use crate::ui::display_manager::DisplayManager;

/// Main screen: shows a week and maps commands or key sequences onto the
/// controller.
pub struct TimetableFlow<'a> {
    ctx: &'a mut AppContext,
    runtime: &'a Runtime,
    controller: TimetableController<DisplayManager>,
    chrome: UiChrome,
    started: bool,
}

impl<'a> TimetableFlow<'a> {
    pub fn new(
        ctx: &'a mut AppContext,
        runtime: &'a Runtime,
        source: Arc<dyn ActivitySource>,
        display: DisplayManager,
    ) -> Self {
        let loader = WeekLoader::new(source, ctx.logger.clone());
        let controller = TimetableController::new(loader, display, ctx.logger.clone())
            .with_title_prefix(ctx.config.title_prefix())
            .with_start_date(ctx.config.start_date());
        Self {
            ctx,
            runtime,
            controller,
            chrome: UiChrome::new(),
            started: false,
        }
    }

    pub fn controller(&self) -> &TimetableController<DisplayManager> {
        &self.controller
    }

    fn print_startup(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.chrome.print_banner();
        println!();
        println!("Type 'help' for commands.");
        println!("Config path: {}", self.ctx.config_path.display());
        println!("Data file: {}", self.ctx.config.data_file().display());
        println!();
        self.runtime.block_on(self.controller.start());
    }

    fn prepare_output_space(&self) {
        self.chrome.print_prompt_bottom_padding();
        println!();
        print!("{STYLE_RESET}");
        let _ = io::stdout().flush();
    }

    fn run_command(&mut self, command: ShellCommand) -> FlowCtrl {
        let outcome = match command {
            ShellCommand::Previous => self.runtime.block_on(self.controller.navigate(-1)),
            ShellCommand::Next => self.runtime.block_on(self.controller.navigate(1)),
            ShellCommand::Today => self.runtime.block_on(self.controller.go_to_current_week()),
            ShellCommand::Print => {
                self.print_export();
                return FlowCtrl::Continue;
            }
            ShellCommand::Config => {
                self.edit_config();
                return FlowCtrl::Continue;
            }
            ShellCommand::Help => {
                ShellCommand::help_lines()
                    .iter()
                    .for_each(|line| println!("{line}"));
                return FlowCtrl::Continue;
            }
            ShellCommand::Exit => return FlowCtrl::Finish,
        };
        self.report_ignored(outcome);
        FlowCtrl::Continue
    }

    fn run_shortcut(&self, shortcut: Shortcut) {
        let outcome = self
            .runtime
            .block_on(self.controller.handle_shortcut(shortcut));
        self.report_ignored(outcome);
    }

    fn report_ignored(&self, outcome: NavOutcome) {
        if outcome == NavOutcome::Ignored {
            println!("Nothing to do; use ctrl/cmd with left, right or home.");
        }
    }

    fn print_export(&self) {
        match self.controller.print(&self.ctx.exports_dir) {
            Ok(path) => self.ctx.logger.info(
                format!("Saved printable timetable to {}", path.display()),
                LogTarget::ConsoleOnly,
            ),
            Err(err) => self
                .ctx
                .logger
                .error(format!("Print failed. {err}"), LogTarget::ConsoleAndFile),
        }
    }

    /// Settings apply to the next load, so the current week is redrawn when
    /// anything changed.
    fn edit_config(&mut self) {
        let (result, changed) = {
            let mut flow = ConfigEditFlow::new(&mut *self.ctx);
            let result = Prompter::new().run(&mut flow);
            (result, flow.changed())
        };
        if let Err(err) = result {
            self.ctx
                .logger
                .error(format!("Config editing stopped. {err}"), LogTarget::ConsoleAndFile);
        }
        if changed {
            self.controller
                .set_title_prefix(self.ctx.config.title_prefix());
            self.runtime.block_on(self.controller.navigate(0));
        }
    }
}

impl<'a> Flow for TimetableFlow<'a> {
    fn render(&mut self) -> Result<()> {
        self.print_startup();
        self.chrome.print_prompt("> ");
        Ok(())
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        self.prepare_output_space();
        if input.trim().is_empty() {
            return Ok(FlowCtrl::Continue);
        }

        if let Some(command) = ShellCommand::parse(input.trim()) {
            self.ctx
                .logger
                .info(format!("Command run: {}", input.trim()), LogTarget::FileOnly);
            return Ok(self.run_command(command));
        }

        if let Some(shortcut) = Shortcut::parse(input) {
            self.run_shortcut(shortcut);
            return Ok(FlowCtrl::Continue);
        }

        println!("Unknown input '{}'. Type 'help' for commands.", input.trim());
        Ok(FlowCtrl::Continue)
    }
}
