//! Bridgy CLI - for exercising the retrieval engine
//!
//! # Commands
//!
//! ```bash
//! # Ask a question and show the answer with its sources
//! bridgy ask "What is JavaScript?"
//!
//! # Show ranked matches with scores and excerpts
//! bridgy search -k 5 "async await"
//!
//! # Ask through the voice adapter (filler words are dropped)
//! bridgy voice "umm so what is like python"
//!
//! # Interactive session, one question per line
//! bridgy chat
//!
//! # Run the accuracy checks
//! bridgy eval
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use bridgy_lib::{
    adapter::{ChatAdapter, Exchange, VoiceAdapter},
    cache::CacheConfig,
    corpus::Corpus,
    eval::{default_cases, evaluate},
    score::{MatchMode, ScoringConfig},
    search::{EngineConfig, RetrievalEngine, DEFAULT_MAX_RESULTS},
};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bridgy")]
#[command(about = "Keyword retrieval and answers over a programming knowledge base")]
#[command(version)]
struct Cli {
    /// JSON corpus to search instead of the bundled knowledge base
    #[arg(long, global = true, env = "BRIDGY_CORPUS")]
    corpus: Option<PathBuf>,

    /// Token matching: "substring" or "whole-word"
    #[arg(long, global = true, default_value_t = MatchMode::Substring)]
    match_mode: MatchMode,

    /// Keep punctuation attached to query tokens
    #[arg(long, global = true)]
    keep_punctuation: bool,

    /// Number of results to return
    #[arg(short = 'k', long, global = true, default_value_t = DEFAULT_MAX_RESULTS)]
    max_results: usize,

    /// Disable memoisation of repeated questions
    #[arg(long, global = true)]
    no_cache: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a question and list the sources used
    Ask {
        /// The question
        query: String,

        /// Print the full exchange as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show ranked matches with scores and excerpts
    Search {
        /// Search query
        query: String,
    },

    /// Answer a speech transcript through the voice adapter
    Voice {
        /// Transcript text
        transcript: String,

        /// Print the full exchange as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive session reading one question per line from stdin
    Chat,

    /// Run the reference accuracy checks
    Eval,

    /// List the documents in the corpus
    Corpus,
}

impl Cli {
    fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            max_results: self.max_results,
            scoring: ScoringConfig {
                match_mode: self.match_mode,
                strip_punctuation: !self.keep_punctuation,
            },
            cache: (!self.no_cache).then(CacheConfig::default),
        }
    }

    fn load_corpus(&self) -> Result<Corpus> {
        match &self.corpus {
            Some(path) => Corpus::load(path)
                .with_context(|| format!("loading corpus from {}", path.display())),
            None => Ok(Corpus::builtin()),
        }
    }
}

fn print_exchange(exchange: &Exchange, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(exchange)?);
        return Ok(());
    }

    println!("{}\n", exchange.answer);
    if !exchange.sources.is_empty() {
        println!("Sources ({} confidence):", exchange.tier);
        for source in &exchange.sources {
            println!("  - {} [{}] (score: {:.1})", source.title, source.category, source.score);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let corpus = cli.load_corpus()?;
    info!(documents = corpus.len(), "corpus ready");
    let engine = Arc::new(RetrievalEngine::with_config(corpus, cli.engine_config())?);

    match cli.command {
        Commands::Ask { query, json } => {
            let exchange = ChatAdapter::new(engine).ask(&query);
            print_exchange(&exchange, json)?;
        }

        Commands::Search { query } => {
            let results = engine.retrieve(&query);

            if results.is_empty() {
                println!("No matches for '{query}'");
            }
            for (i, result) in results.iter().enumerate() {
                println!(
                    "#{} {} (id: {}, score: {:.1})",
                    i + 1,
                    result.document.title,
                    result.document.id,
                    result.score
                );
                println!("---");
                println!("{}\n", result.relevant_text);
            }
        }

        Commands::Voice { transcript, json } => {
            let exchange = VoiceAdapter::new(engine).ask(&transcript);
            if !json {
                println!("Heard: {}\n", exchange.query);
            }
            print_exchange(&exchange, json)?;
        }

        Commands::Chat => {
            let chat = ChatAdapter::new(engine);
            let mut lines = BufReader::new(tokio::io::stdin()).lines();

            println!("Ask Bridgy anything about programming. Empty line or Ctrl-D to quit.");
            loop {
                print!("> ");
                std::io::stdout().flush()?;

                let Some(line) = lines.next_line().await? else {
                    break;
                };
                let line = line.trim();
                if line.is_empty() {
                    break;
                }

                let exchange = chat.ask(line);
                print_exchange(&exchange, false)?;
                println!();
            }
        }

        Commands::Eval => {
            println!("Testing retrieval accuracy\n");
            for outcome in evaluate(&*engine, &default_cases()) {
                println!("Case: {}", outcome.case.description);
                println!("  Query:    {}", outcome.case.query);
                println!("  Accuracy: {}", outcome.accuracy);
                println!("  Results:  {}", outcome.results);
                if let Some(top) = &outcome.top_document {
                    println!("  Top:      {top} ({} confidence)", outcome.tier);
                }
                println!("  Answer:   {}...\n", outcome.preview.replace('\n', " "));
            }
        }

        Commands::Corpus => {
            let corpus = engine.corpus();
            println!("{} documents:\n", corpus.len());
            for doc in corpus.documents() {
                println!("{:>4}  {} [{}]  tags: {}", doc.id, doc.title, doc.category, doc.tags.join(", "));
            }
        }
    }

    Ok(())
}
