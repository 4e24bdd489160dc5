//! Fixture builder for on-disk results trees.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const RUN_HEADER: &str = "ModelID;ModelIteration;AlgorithmID;RunID;T;InteractionSize;\
InteractionsUpdated;FoundInteractionsMerged;FoundMergedUpdatedIsSubsetFaultyUpdated;\
FaultyUpdatedIsSubsetFoundMergedUpdated;MissedLiteralsCount;IncorrectlyFoundLiteralsCount;\
ConfigurationVerificationCount;Time";

pub const ALGORITHMS: &str = "AlgorithmID;Name\n\
0;NaiveRandom\n\
1;ForwardBackward\n\
2;IterativeSingle\n";

pub const MODELS: &str = "ModelID;Name;#Variables;#Clauses\n\
1;M1;10;20\n\
2;M2;30;40\n";

/// A temporary `<root>/.current` + `<root>/<run>/data-*` tree.
pub struct ResultsTree {
    pub dir: TempDir,
    pub run: String,
}

impl ResultsTree {
    pub fn new(run: &str) -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".current"), format!("{run}\n")).unwrap();
        fs::create_dir_all(dir.path().join(run)).unwrap();
        ResultsTree {
            dir,
            run: run.to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn run_dir(&self) -> PathBuf {
        self.root().join(&self.run)
    }

    /// Add a batch directory with the given file contents; `None` leaves a
    /// file out.
    pub fn batch(
        &self,
        name: &str,
        runs: Option<&str>,
        algorithms: Option<&str>,
        models: Option<&str>,
    ) -> PathBuf {
        let dir = self.run_dir().join(name);
        fs::create_dir_all(&dir).unwrap();
        for (file, content) in [
            ("runData.csv", runs),
            ("algorithms.csv", algorithms),
            ("models.csv", models),
        ] {
            if let Some(content) = content {
                fs::write(dir.join(file), content).unwrap();
            }
        }
        dir
    }

    /// Add a batch with the standard lookup tables and these run rows.
    pub fn standard_batch(&self, name: &str, rows: &[&str]) -> PathBuf {
        let mut runs = format!("{RUN_HEADER}\n");
        for row in rows {
            runs.push_str(row);
            runs.push('\n');
        }
        self.batch(name, Some(&runs), Some(ALGORITHMS), Some(MODELS))
    }
}

/// One run row in `RUN_HEADER` order.
pub fn run_row(algorithm: u32, model: u32, t: u32, size: u32, found: &str, faulty: &str, time: u32) -> String {
    format!("{model};0;{algorithm};1;{t};{size};[[1]];[[1]];{found};{faulty};0;1;7;{time}")
}
