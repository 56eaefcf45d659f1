use std::io::{self, Write};

use log::warn;
use math_calculator::{run, session::GOODBYE};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = ctrlc::set_handler(|| {
        let mut stdout = io::stdout();
        // Ошибку записи игнорируем: процесс всё равно завершается.
        let _ = writeln!(stdout, "\n\n{GOODBYE}");
        let _ = stdout.flush();
        std::process::exit(0);
    }) {
        warn!("Ctrl+C handler not installed: {e}");
    }

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
