use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use cit_check::data::labels::Algorithm;
use cit_check::data::loader::{
    ALGORITHMS_FILE, DATA_DIR_PREFIX, DELIMITER, MODELS_FILE, POINTER_FILE, RUN_DATA_FILE,
};

/// Write a synthetic results tree that `cit-check` can read.
#[derive(Parser, Debug)]
#[command(name = "generate-sample")]
#[command(version)]
struct Args {
    /// Results root to create
    #[arg(value_name = "OUTPUT_DIR", default_value = "results/")]
    output_dir: PathBuf,

    /// Name of the run directory written to `.current`
    #[arg(long, default_value = "sample")]
    run_name: String,

    /// Number of data-* batches
    #[arg(long, default_value_t = 2)]
    batches: usize,

    /// Runs per batch
    #[arg(long, default_value_t = 50)]
    runs: usize,

    /// PRNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

const MODELS: &[(&str, u32, u32)] = &[
    ("busybox", 854, 1123),
    ("embtoolkit", 1179, 5412),
    ("financial", 771, 7238),
    ("automotive01", 2513, 10300),
];

const RUN_COLUMNS: &[&str] = &[
    "ModelID",
    "ModelIteration",
    "AlgorithmID",
    "AlgorithmIteration",
    "RunID",
    "T",
    "InteractionSize",
    "Interactions",
    "InteractionsUpdated",
    "FoundInteractionCount",
    "FoundInteractionsMerged",
    "FoundMergedUpdatedIsSubsetFaultyUpdated",
    "FaultyUpdatedIsSubsetFoundMergedUpdated",
    "FoundMergedIsSubsetFaulty",
    "FaultyIsSubsetFoundMerged",
    "FaultyIsSubsetFound",
    "FoundIsSubsetFaulty",
    "FoundLiteralsCount",
    "CorrectlyFoundLiteralsCount",
    "MissedLiteralsCount",
    "IncorrectlyFoundLiteralsCount",
    "ConfigurationVerificationCount",
    "Time",
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform in `0..n`.
    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    fn chance(&mut self, percent: u64) -> bool {
        self.below(100) < percent
    }

    fn flag(&mut self) -> &'static str {
        if self.chance(70) {
            "T"
        } else {
            "F"
        }
    }

    /// A random interaction of `size` literals over `variables`, e.g. `[3, -17]`.
    fn interaction(&mut self, size: u64, variables: u32) -> String {
        let literals: Vec<String> = (0..size)
            .map(|_| {
                let var = self.below(u64::from(variables)) as i64 + 1;
                let literal = if self.chance(50) { var } else { -var };
                literal.to_string()
            })
            .collect();
        format!("[{}]", literals.join(", "))
    }
}

fn write_table(path: &Path, header: &[&str], rows: &[Vec<String>]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn run_row(rng: &mut SimpleRng, run_id: usize) -> Vec<String> {
    let model_id = rng.below(MODELS.len() as u64) as usize;
    let variables = MODELS[model_id].1;
    let algorithm_id = rng.below(Algorithm::ALL.len() as u64);
    // Size 0 marks a run without an injected fault.
    let interaction_size = rng.below(4);
    let t = 1 + rng.below(3);
    let faulty = rng.interaction(interaction_size, variables);

    let mut row = vec![
        model_id.to_string(),
        rng.below(3).to_string(),
        algorithm_id.to_string(),
        "0".to_string(),
        run_id.to_string(),
        t.to_string(),
        interaction_size.to_string(),
        format!("[{faulty}]"),
        format!("[{faulty}]"),
    ];

    if rng.chance(10) {
        // Finder gave up: no result.
        row.extend(["-1", "null", "N", "N", "N", "N", "N", "N", "-1", "-1", "-1", "-1"].map(String::from));
    } else {
        let found = rng.interaction(interaction_size.max(1), variables);
        let literals = interaction_size.max(1);
        let missed = rng.below(literals + 1);
        let incorrect = rng.below(2);
        row.push((1 + rng.below(5)).to_string());
        row.push(found);
        for _ in 0..6 {
            row.push(rng.flag().to_string());
        }
        row.push((literals - missed + incorrect).to_string());
        row.push((literals - missed).to_string());
        row.push(missed.to_string());
        row.push(incorrect.to_string());
    }

    row.push(rng.below(500).to_string());
    row.push((50 + rng.below(20_000)).to_string());
    row
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut rng = SimpleRng::new(args.seed);

    let run_dir = args.output_dir.join(&args.run_name);
    fs::create_dir_all(&run_dir).with_context(|| format!("creating {}", run_dir.display()))?;
    fs::write(args.output_dir.join(POINTER_FILE), format!("{}\n", args.run_name))?;

    let algorithms: Vec<Vec<String>> = Algorithm::ALL
        .iter()
        .enumerate()
        .map(|(id, algo)| vec![id.to_string(), algo.source_name().to_string()])
        .collect();
    let models: Vec<Vec<String>> = MODELS
        .iter()
        .enumerate()
        .map(|(id, (name, vars, clauses))| {
            vec![id.to_string(), name.to_string(), vars.to_string(), clauses.to_string()]
        })
        .collect();

    let mut run_id = 0;
    for batch in 0..args.batches {
        let dir = run_dir.join(format!("{DATA_DIR_PREFIX}{batch}"));
        fs::create_dir_all(&dir)?;

        let runs: Vec<Vec<String>> = (0..args.runs)
            .map(|_| {
                run_id += 1;
                run_row(&mut rng, run_id)
            })
            .collect();

        write_table(&dir.join(RUN_DATA_FILE), RUN_COLUMNS, &runs)?;
        write_table(&dir.join(ALGORITHMS_FILE), &["AlgorithmID", "Name"], &algorithms)?;
        write_table(
            &dir.join(MODELS_FILE),
            &["ModelID", "Name", "#Variables", "#Clauses"],
            &models,
        )?;
    }

    println!(
        "Wrote {} run(s) in {} batch(es) to {}",
        run_id,
        args.batches,
        run_dir.display()
    );
    Ok(())
}
