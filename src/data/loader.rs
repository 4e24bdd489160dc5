use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::join::left_join;
use super::model::{CellValue, ColumnKind, Row, Table};
use crate::error::{PipelineError, Result};

// ---------------------------------------------------------------------------
// File layout
// ---------------------------------------------------------------------------

pub const POINTER_FILE: &str = ".current";
pub const DATA_DIR_PREFIX: &str = "data-";
pub const RUN_DATA_FILE: &str = "runData.csv";
pub const ALGORITHMS_FILE: &str = "algorithms.csv";
pub const MODELS_FILE: &str = "models.csv";
pub const DELIMITER: u8 = b';';

pub const ALGORITHM_KEY: &str = "AlgorithmID";
pub const MODEL_KEY: &str = "ModelID";
pub const ALGORITHM_SUFFIX: &str = "_algo";
pub const MODEL_SUFFIX: &str = "_model";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load every run of the active dataset below `root` into one table.
///
/// The active run directory and each selected batch directory are written
/// to `out` as they are resolved.
pub fn load_dataset(root: &Path, out: &mut dyn Write) -> Result<Table> {
    let cur_dir = read_pointer(root)?;
    writeln!(out, "{cur_dir}")?;

    let run_dir = root.join(&cur_dir);
    let data_dirs = data_dirs(&run_dir)?;
    if data_dirs.is_empty() {
        return Err(PipelineError::NoDataDirectories { path: run_dir });
    }

    let mut parts = Vec::with_capacity(data_dirs.len());
    for dir in &data_dirs {
        writeln!(out, "{}", dir.display())?;
        parts.push(load_data_dir(dir)?);
    }

    let combined = Table::concat(parts);
    info!(
        "loaded {} run(s) from {} director{} of {}",
        combined.len(),
        data_dirs.len(),
        if data_dirs.len() == 1 { "y" } else { "ies" },
        run_dir.display()
    );
    Ok(combined)
}

/// Resolve the active run directory from `<root>/.current`.
pub fn read_pointer(root: &Path) -> Result<String> {
    let path = root.join(POINTER_FILE);
    let text = std::fs::read_to_string(&path).map_err(|source| {
        PipelineError::MissingPointerFile {
            path: path.clone(),
            source,
        }
    })?;

    text.lines()
        .map(str::trim_end)
        .find(|line| !line.is_empty())
        .map(str::to_string)
        .ok_or(PipelineError::EmptyPointerFile { path })
}

/// Direct subdirectories of `run_dir` whose name starts with `data-`,
/// sorted by name.
pub fn data_dirs(run_dir: &Path) -> Result<Vec<PathBuf>> {
    let missing = |source| PipelineError::MissingRunDirectory {
        path: run_dir.to_path_buf(),
        source,
    };

    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(run_dir).map_err(missing)? {
        let entry = entry.map_err(missing)?;
        let path = entry.path();
        let selected = path.is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with(DATA_DIR_PREFIX));
        if selected {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Load one batch directory: runs joined with algorithm and model names.
pub fn load_data_dir(dir: &Path) -> Result<Table> {
    let runs = read_table(&dir.join(RUN_DATA_FILE))?;
    let algorithms = read_table(&dir.join(ALGORITHMS_FILE))?;
    let models = read_table(&dir.join(MODELS_FILE))?;

    let joined = left_join(&runs, &algorithms, ALGORITHM_KEY, ALGORITHM_SUFFIX)?;
    let joined = left_join(&joined, &models, MODEL_KEY, MODEL_SUFFIX)?;
    debug!(
        "{}: {} run(s), {} algorithm(s), {} model(s)",
        dir.display(),
        runs.len(),
        algorithms.len(),
        models.len()
    );
    Ok(joined)
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

/// Read a `;`-separated table with a header row.
pub fn read_table(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|source| PipelineError::MissingSourceTable {
        path: path.to_path_buf(),
        source,
    })?;
    let malformed = |source| PipelineError::MalformedTable {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .from_reader(file);
    let headers: Vec<String> = reader
        .headers()
        .map_err(malformed)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let records = reader
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(malformed)?;

    // Typed per column: a label such as `007` stays text when its
    // neighbours are text.
    let kinds: Vec<ColumnKind> = (0..headers.len())
        .map(|i| ColumnKind::infer(records.iter().filter_map(|r| r.get(i))))
        .collect();

    let mut table = Table::new(headers.clone());
    for record in &records {
        let row: Row = headers
            .iter()
            .zip(&kinds)
            .zip(record.iter())
            .map(|((col, kind), value)| (col.clone(), CellValue::parse_as(value, *kind)))
            .collect();
        table.push_row(row);
    }

    debug!("{}: {} row(s)", path.display(), table.len());
    Ok(table)
}
