use anyhow::Result;
use shapeshow::{app, cli};

fn main() -> Result<()> {
    // Process CLI arguments first (before logging init for cleaner output)
    let options = cli::process_cli();
    shapeshow::logging::init_log_bridge(options.log_level);

    log::info!("Starting shapeshow {}", shapeshow::VERSION);
    for (i, arg) in std::env::args().enumerate() {
        log::debug!("  argv[{}]: {}", i, arg);
    }

    let stdout = std::io::stdout();
    app::run(&options, stdout.lock())
}
