// ============================================================
// Layer 1 - CLI Commands and Arguments
// ============================================================
// Subcommands and their flags. clap's derive macros generate the
// --help text, the error messages for missing arguments and the
// string → number conversions.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};

use crate::application::train_use_case::TrainConfig;
use crate::ml::config::{Objective, Word2VecConfig};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train Word2Vec embeddings on a directory of novels
    Train(TrainArgs),

    /// Nearest neighbours of a word, or of an analogy
    /// (--positive king --positive woman --negative man)
    Similar(SimilarArgs),

    /// Cosine similarity between two words
    Similarity(SimilarityArgs),

    /// Which word does not belong with the others
    Outlier(OutlierArgs),

    /// List the novels described by a metadata CSV
    Catalog(CatalogArgs),
}

/// Training objective as spelled on the command line
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ObjectiveArg {
    /// Predict the context from the word
    SkipGram,
    /// Predict the word from its context
    Cbow,
}

impl From<ObjectiveArg> for Objective {
    fn from(a: ObjectiveArg) -> Self {
        match a {
            ObjectiveArg::SkipGram => Objective::SkipGram,
            ObjectiveArg::Cbow => Objective::Cbow,
        }
    }
}

#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Directory containing one plaintext novel per file
    #[arg(long, default_value = "data/novels")]
    pub docs_dir: String,

    /// Directory to write vectors.txt, train_config.json and metrics.csv
    #[arg(long, default_value = "model")]
    pub model_dir: String,

    /// Only read files with this extension (e.g. txt)
    #[arg(long)]
    pub extension: Option<String>,

    /// Dimensionality of each word vector
    #[arg(long, default_value_t = 100)]
    pub vector_size: usize,

    /// Maximum distance between a word and its context words
    #[arg(long, default_value_t = 5)]
    pub window: usize,

    /// Ignore words that occur fewer times than this
    #[arg(long, default_value_t = 5)]
    pub min_count: usize,

    /// Training objective: skip-gram or cbow
    #[arg(long, value_enum, default_value_t = ObjectiveArg::SkipGram)]
    pub objective: ObjectiveArg,

    /// Initial learning rate
    #[arg(long, default_value_t = 0.025)]
    pub alpha: f32,

    /// Learning rate at the end of training
    #[arg(long, default_value_t = 0.0001)]
    pub min_alpha: f32,

    /// Passes over the corpus
    #[arg(long, default_value_t = 5)]
    pub epochs: usize,

    /// Words processed between learning-rate updates
    #[arg(long, default_value_t = 10_000)]
    pub batch_words: usize,

    /// Noise words drawn per positive example
    #[arg(long, default_value_t = 5)]
    pub negative: usize,

    /// Random seed; same seed and corpus give the same vectors
    #[arg(long, default_value_t = 1)]
    pub seed: u64,
}

/// Convert CLI TrainArgs into the application-layer TrainConfig.
/// The application layer never sees clap types.
impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            docs_dir:  a.docs_dir,
            model_dir: a.model_dir,
            extension: a.extension,
            word2vec:  Word2VecConfig {
                vector_size: a.vector_size,
                window:      a.window,
                min_count:   a.min_count,
                objective:   a.objective.into(),
                alpha:       a.alpha,
                min_alpha:   a.min_alpha,
                epochs:      a.epochs,
                batch_words: a.batch_words,
                negative:    a.negative,
                seed:        a.seed,
            },
        }
    }
}

#[derive(Args, Debug)]
pub struct SimilarArgs {
    /// Words that pull the query towards them
    #[arg(long, short, required = true, num_args = 1..)]
    pub positive: Vec<String>,

    /// Words that push the query away
    #[arg(long, short, num_args = 1..)]
    pub negative: Vec<String>,

    /// How many neighbours to print
    #[arg(long, default_value_t = 10)]
    pub topn: usize,

    #[arg(long, default_value = "model")]
    pub model_dir: String,
}

#[derive(Args, Debug)]
pub struct SimilarityArgs {
    pub first: String,

    pub second: String,

    #[arg(long, default_value = "model")]
    pub model_dir: String,
}

#[derive(Args, Debug)]
pub struct OutlierArgs {
    /// Candidate words
    #[arg(required = true, num_args = 2..)]
    pub words: Vec<String>,

    #[arg(long, default_value = "model")]
    pub model_dir: String,
}

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// CSV with filename,id,language,year,title,gender,person,tokens
    #[arg(long, default_value = "data/metadata.csv")]
    pub metadata: String,

    /// Directory the novels live in, to flag missing files
    #[arg(long, default_value = "data/novels")]
    pub docs_dir: String,

    /// Only show novels in this language
    #[arg(long)]
    pub language: Option<String>,
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_train_defaults_match_word2vec_defaults() {
        let cli = Cli::parse_from(["novel-vectors", "train"]);
        let Commands::Train(args) = cli.command else {
            panic!("expected train");
        };
        let cfg: TrainConfig = args.into();
        assert_eq!(cfg.word2vec, Word2VecConfig::default());
        assert_eq!(cfg.docs_dir, "data/novels");
    }

    #[test]
    fn test_train_flags() {
        let cli = Cli::parse_from([
            "novel-vectors", "train", "--objective", "cbow", "--vector-size", "300",
            "--min-count", "1", "--extension", "txt",
        ]);
        let Commands::Train(args) = cli.command else {
            panic!("expected train");
        };
        let cfg: TrainConfig = args.into();
        assert_eq!(cfg.word2vec.objective, Objective::Cbow);
        assert_eq!(cfg.word2vec.vector_size, 300);
        assert_eq!(cfg.word2vec.min_count, 1);
        assert_eq!(cfg.extension.as_deref(), Some("txt"));
    }

    #[test]
    fn test_analogy_flags() {
        let cli = Cli::parse_from([
            "novel-vectors", "similar", "-p", "king", "woman", "-n", "man", "--topn", "3",
        ]);
        let Commands::Similar(args) = cli.command else {
            panic!("expected similar");
        };
        assert_eq!(args.positive, vec!["king", "woman"]);
        assert_eq!(args.negative, vec!["man"]);
        assert_eq!(args.topn, 3);
    }

    #[test]
    fn test_outlier_needs_two_words() {
        assert!(Cli::try_parse_from(["novel-vectors", "outlier", "sea"]).is_err());
        assert!(Cli::try_parse_from(["novel-vectors", "outlier", "sea", "ship"]).is_ok());
    }
}
