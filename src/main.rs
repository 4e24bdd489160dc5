use clap::Parser;

use cit_check::{CheckApp, Config};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::parse();
    let app = CheckApp::new(config);

    let stdout = std::io::stdout();
    app.run(&mut stdout.lock())?;
    Ok(())
}
