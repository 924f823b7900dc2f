use adaptpad::logging::{ensure_parent_dir, Logger};
use adaptpad::options::{usage, Options, RunMode};
use adaptpad::{error, Result, TuiApplication};

fn main() -> Result<()> {
    error::setup_panic_handler();

    let options = Options::from_env();
    match options.run_mode {
        RunMode::Help => {
            print!("{}", usage());
            Ok(())
        }
        RunMode::Version => {
            println!("adaptpad {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        RunMode::Tui => {
            init_logging(&options);
            run_tui()
        }
    }
}

fn init_logging(options: &Options) {
    let mut logger = Logger::new(options.log_level);
    if let Some(path) = &options.debug_log {
        match ensure_parent_dir(path) {
            Ok(()) => logger = logger.with_file_output(path),
            Err(err) => eprintln!("warning: cannot create log directory for {}: {}", path.display(), err),
        }
    }
    logger.install();
}

fn run_tui() -> Result<()> {
    let mut app = TuiApplication::new();
    let result = app.run();
    if let Err(err) = &result {
        log::error!("terminal session failed: {}", err);
    }
    result
}
