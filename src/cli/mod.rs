// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and routes each subcommand to its
// use case. All printing happens here; the use cases return data.
//
//   train       corpus → vectors
//   similar     nearest neighbours / analogies
//   similarity  cosine of two words
//   outlier     odd one out
//   catalog     metadata table listing
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{CatalogArgs, Commands, OutlierArgs, SimilarArgs, SimilarityArgs, TrainArgs};

use crate::application::{
    catalog_use_case::CatalogUseCase, query_use_case::QueryUseCase, train_use_case::TrainUseCase,
};

#[derive(Parser, Debug)]
#[command(
    name = "novel-vectors",
    version,
    about = "Train Word2Vec embeddings on a directory of novels, then explore word similarity."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Train(args) => run_train(args),
            Commands::Similar(args) => run_similar(args),
            Commands::Similarity(args) => run_similarity(args),
            Commands::Outlier(args) => run_outlier(args),
            Commands::Catalog(args) => run_catalog(args),
        }
    }
}

fn run_train(args: TrainArgs) -> Result<()> {
    tracing::info!("Starting training on novels in: {}", args.docs_dir);
    let model_dir = args.model_dir.clone();

    let summary = TrainUseCase::new(args.into()).execute()?;

    println!(
        "Trained on {} documents ({} sentences, {} tokens). Vocabulary: {} words. Saved to '{}'.",
        summary.documents, summary.sentences, summary.tokens, summary.vocab_size, model_dir
    );
    Ok(())
}

fn run_similar(args: SimilarArgs) -> Result<()> {
    let query = QueryUseCase::open(&args.model_dir)?;
    let results = query.similar(&args.positive, &args.negative, args.topn)?;

    for (word, score) in results {
        println!("{word:<20} {score:.4}");
    }
    Ok(())
}

fn run_similarity(args: SimilarityArgs) -> Result<()> {
    let query = QueryUseCase::open(&args.model_dir)?;
    let score = query.similarity(&args.first, &args.second)?;
    println!("{score:.4}");
    Ok(())
}

fn run_outlier(args: OutlierArgs) -> Result<()> {
    let query = QueryUseCase::open(&args.model_dir)?;
    println!("{}", query.outlier(&args.words)?);
    Ok(())
}

fn run_catalog(args: CatalogArgs) -> Result<()> {
    let entries = CatalogUseCase::new(args.metadata, args.docs_dir).list(args.language.as_deref())?;

    for e in &entries {
        let r = &e.record;
        println!(
            "{} {:>4} {:<3} {:>5} {:<40} {:<2} {:<4} {:>8}  {}",
            if e.on_disk { "*" } else { " " },
            r.id,
            r.language,
            r.year,
            r.title,
            r.gender,
            r.person,
            r.tokens,
            r.filename,
        );
    }
    println!("{} novels (* = file present)", entries.len());
    Ok(())
}
