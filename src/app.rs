use std::io::Write;

use log::info;

use crate::config::Config;
use crate::data::model::Table;
use crate::data::{investigate, loader, normalize};
use crate::error::Result;
use crate::report;

// ---------------------------------------------------------------------------
// Pipeline driver
// ---------------------------------------------------------------------------

/// One pipeline run: load, normalize, investigate, print.
pub struct CheckApp {
    pub config: Config,
}

impl CheckApp {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Load and normalize the active dataset. Diagnostics go to `out`.
    pub fn prepare_data(&self, out: &mut dyn Write) -> Result<Table> {
        let raw = loader::load_dataset(&self.config.root_dir, out)?;
        normalize::normalize(raw, out)
    }

    /// Run the whole pipeline and write the disagreement report to `out`.
    pub fn run(&self, out: &mut dyn Write) -> Result<Table> {
        info!("reading results below {}", self.config.root_dir.display());
        let data = self.prepare_data(out)?;
        let problems = investigate::investigate(&data)?;

        writeln!(out, "{}", report::render(&problems)?)?;
        Ok(problems)
    }
}
