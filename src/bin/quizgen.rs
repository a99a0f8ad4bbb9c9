use anyhow::{bail, Context, Result};
use clap::Parser;
use quiz_gen::clients::{OpenRouterClient, OpenRouterConfig, OpenRouterModel};
use quiz_gen::interceptors::FileInterceptor;
use quiz_gen::{parse, GeneratedQuestion, QuestionGenerator};
use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Generate multiple-choice questions from text",
    long_about = None
)]
#[command(after_help = "ENVIRONMENT VARIABLES:
    OPENROUTER_API_KEY  API key for the completion service
    QUIZGEN_MODEL       Model identifier override
    QUIZGEN_ENDPOINT    Chat-completion endpoint override
    QUIZGEN_ORIGIN      Value of the HTTP-Referer header
    QUIZGEN_TITLE       Value of the X-Title header
    RUST_LOG            Log filter (default: info)

EXAMPLES:
    quizgen notes.txt                     # Generate questions from a file
    cat notes.txt | quizgen               # Read source text from stdin
    quizgen --parse-only reply.csv        # Parse a saved model reply offline
    quizgen --schema                      # Print the output JSON schema")]
struct Args {
    /// Source text file, or a raw reply with --parse-only [default: stdin]
    input: Option<PathBuf>,

    /// API key [default: $OPENROUTER_API_KEY]
    #[arg(long)]
    api_key: Option<String>,

    /// Model identifier
    #[arg(short, long)]
    model: Option<String>,

    /// Parse the input as a raw model reply without calling the service
    #[arg(long)]
    parse_only: bool,

    /// Save each prompt and raw reply under this directory
    #[arg(long)]
    transcripts: Option<PathBuf>,

    /// Print the JSON schema of a generated question and exit
    #[arg(long)]
    schema: bool,
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))
        }
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            Ok(buf)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    if args.schema {
        let schema = schemars::schema_for!(GeneratedQuestion);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    let input = read_input(args.input.as_ref())?;

    let questions = if args.parse_only {
        parse(&input)
    } else {
        let mut config = match args.api_key {
            Some(key) => OpenRouterConfig::new(key),
            None => OpenRouterConfig::from_env()?,
        };
        if let Some(model) = args.model.as_deref() {
            config = config.with_model(OpenRouterModel::from(model));
        }
        if config.api_key.trim().is_empty() {
            bail!("API key must not be empty");
        }

        let mut generator = QuestionGenerator::new(OpenRouterClient::new(config));
        if let Some(dir) = args.transcripts {
            generator = generator.with_interceptor(Arc::new(FileInterceptor::new(dir)));
        }
        generator.generate(&input).await.context("generating questions")?
    };

    info!(count = questions.len(), "Done");
    println!("{}", serde_json::to_string_pretty(&questions)?);
    Ok(())
}
