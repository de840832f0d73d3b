use std::process;

fn main() {
    if let Err(e) = wavetrail::app::run() {
        tracing::error!("Fatal error: {e:#}");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
