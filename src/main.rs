//! Exam Timer: a full-screen terminal countdown.
//!
//! Logging is off unless `RUST_LOG` is set, and goes to stderr so it can be
//! redirected away from the UI, e.g. `RUST_LOG=exam_timer=debug exam-timer 2>timer.log`.

use bubbletea_rs::Program;
use exam_timer::App;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("Starting exam-timer v{}", env!("CARGO_PKG_VERSION"));

    let program = Program::<App>::builder().alt_screen(true).build()?;
    program.run().await?;

    info!("exam-timer exited");
    Ok(())
}
