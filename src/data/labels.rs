//! Canonical names shared by the normalizer and the investigator.

use std::fmt;

/// Algorithm identities under test.
///
/// The relabeling table and the investigator's filter both read from here,
/// so the two can never disagree about a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    Random,
    Single,
    IncRandom,
    IncSingle,
    OldIncremental,
    Incremental,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Random,
        Algorithm::Single,
        Algorithm::IncRandom,
        Algorithm::IncSingle,
        Algorithm::OldIncremental,
        Algorithm::Incremental,
    ];

    /// Name the benchmark writes into `algorithms.csv`.
    pub fn source_name(self) -> &'static str {
        match self {
            Algorithm::Random => "NaiveRandom",
            Algorithm::Single => "Single",
            Algorithm::IncRandom => "IterativeNaiveRandom",
            Algorithm::IncSingle => "IterativeSingle",
            Algorithm::OldIncremental => "ForwardBackwardOld",
            Algorithm::Incremental => "ForwardBackward",
        }
    }

    /// Label used in the analysis schema.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Random => "Random",
            Algorithm::Single => "iident",
            Algorithm::IncRandom => "IncRandom",
            Algorithm::IncSingle => "IncSingle",
            Algorithm::OldIncremental => "OldIncremental",
            Algorithm::Incremental => "Inciident",
        }
    }

    /// Exact-match lookup of a benchmark name.
    pub fn from_source_name(name: &str) -> Option<Algorithm> {
        Algorithm::ALL.into_iter().find(|a| a.source_name() == name)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Indicator-pair codes and the result category each one stands for.
/// Order of the code is (found ⊆ faulty, faulty ⊆ found).
pub const RESULT_TYPES: &[(&str, &str)] = &[
    ("NN", "NoResult"),
    ("FF", "Different"),
    ("TF", "Subset"),
    ("FT", "Superset"),
    ("TT", "Equal"),
];

pub const EQUAL: &str = "Equal";

/// Map an indicator-pair code to its category, or `None` for any other code.
pub fn result_type(code: &str) -> Option<&'static str> {
    RESULT_TYPES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_names_round_trip() {
        for algo in Algorithm::ALL {
            assert_eq!(Algorithm::from_source_name(algo.source_name()), Some(algo));
        }
        assert_eq!(Algorithm::from_source_name("forwardbackward"), None);
    }

    #[test]
    fn no_label_is_also_a_source_name() {
        // Relabeling twice must be a no-op.
        for algo in Algorithm::ALL {
            assert_eq!(Algorithm::from_source_name(algo.label()), None, "{algo}");
        }
    }

    #[test]
    fn known_codes() {
        assert_eq!(result_type("TT"), Some(EQUAL));
        assert_eq!(result_type("FT"), Some("Superset"));
        assert_eq!(result_type("TF"), Some("Subset"));
        assert_eq!(result_type("FF"), Some("Different"));
        assert_eq!(result_type("NN"), Some("NoResult"));
        assert_eq!(result_type("T"), None);
        assert_eq!(result_type("TN"), None);
    }
}
