use std::sync::Arc;

use timetable::core::cli::CliPaths;
use timetable::core::context::AppContext;
use timetable::logging::LogTarget;
use timetable::prompter::flows::timetable_flow::TimetableFlow;
use timetable::prompter::prompter::Prompter;
use timetable::ui::chrome::UiChrome;
use timetable::ui::display_manager::DisplayManager;

fn fail_startup(message: &str) -> ! {
    eprint!("{}", UiChrome::new().error_state(message));
    std::process::exit(1);
}

fn main() {
    let paths = CliPaths::from_env().unwrap_or_else(|err| fail_startup(&err));
    let mut ctx = AppContext::new_with_paths(paths.config_path, paths.logs_dir, paths.exports_dir)
        .unwrap_or_else(|err| fail_startup(&err.to_string()));
    let source = ctx.activity_source().unwrap_or_else(|err| {
        ctx.logger.error(err.to_string(), LogTarget::FileOnly);
        fail_startup(&err.to_string())
    });

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => fail_startup(&format!("Could not start the async runtime: {err}")),
    };

    let logger = ctx.logger.clone();
    let flow = TimetableFlow::new(&mut ctx, &runtime, Arc::new(source), DisplayManager::new());
    if let Err(err) = Prompter::new().run(flow) {
        logger.error(format!("{err}"), LogTarget::ConsoleAndFile);
    }
}
