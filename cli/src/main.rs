mod input;
mod render;

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use time::OffsetDateTime;
use transcript::{ExportContext, ExportFormat, RagResult};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("export failed: {0}")]
    Export(#[from] transcript::ExportError),
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("no accepted files to upload")]
    NoFiles,
}

#[derive(Parser, Debug)]
#[command(name = "notebook-cli", about = "Document notebook export and backend CLI")]
struct Cli {
    #[arg(long, env = "NOTEBOOK_API_URL", default_value = "http://localhost:8000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a saved chat log into an export file.
    Export(ExportArgs),
    /// Print the parsed block sequence of an answer as JSON.
    Blocks {
        #[arg(long, default_value = "-", help = "Input file path, or - for stdin")]
        input: String,
    },
    /// Ask a question about the documents in the knowledge base.
    Ask {
        question: String,
        #[arg(long, help = "Print the backend response as JSON")]
        raw: bool,
    },
    /// Upload documents into the knowledge base.
    Upload {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        #[arg(long)]
        no_ocr: bool,
        #[arg(long)]
        clear_kb: bool,
    },
    Health,
    Stats,
    /// Drop every document from the knowledge base.
    Clear,
}

#[derive(Args, Debug)]
struct ExportArgs {
    #[arg(long, default_value = "-", help = "Chat log path, or - for stdin")]
    input: String,

    #[arg(long, value_parser = ExportFormat::from_str, default_value = "md")]
    format: ExportFormat,

    #[arg(long = "source", help = "Document name to list in the export header")]
    sources: Vec<String>,

    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let base_url = cli.base_url;

    match cli.command {
        Command::Export(args) => run_export(args),
        Command::Blocks { input } => run_blocks(&input),
        Command::Ask { question, raw } => run_ask(&base_url, &question, raw).await,
        Command::Upload {
            files,
            no_ocr,
            clear_kb,
        } => run_upload(&base_url, &files, !no_ocr, clear_kb).await,
        Command::Health => print_json(&get_json(&base_url, "/api/health").await?),
        Command::Stats => print_json(&get_json(&base_url, "/api/stats").await?),
        Command::Clear => {
            let response = reqwest::Client::new()
                .delete(endpoint(&base_url, "/api/clear"))
                .send()
                .await?;
            print_json(&read_json(response).await?)
        }
    }
}

fn run_export(args: ExportArgs) -> Result<(), CliError> {
    let text = read_input(&args.input)?;
    let log = input::parse_chat_log(&text)?;
    let now = OffsetDateTime::now_utc();
    let ctx = ExportContext::new(now).with_sources(input::choose_sources(args.sources, log.sources));

    let Some(doc) = transcript::export(&log.messages, args.format, &ctx)? else {
        eprintln!("chat log is empty; nothing exported");
        return Ok(());
    };

    let path = input::output_path(args.output, args.format, now)?;
    std::fs::write(&path, &doc.body).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = doc.body.len(), "export written");
    println!("{}", path.display());
    Ok(())
}

fn run_blocks(path: &str) -> Result<(), CliError> {
    let text = read_input(path)?;
    let rendered = serde_json::to_string_pretty(&transcript::parse(&text))?;
    println!("{rendered}");
    Ok(())
}

async fn run_ask(base_url: &str, question: &str, raw: bool) -> Result<(), CliError> {
    let form = Form::new().text("question", question.to_owned());
    let value = post_rag(base_url, form).await?;
    if raw {
        return print_json(&value);
    }
    let result = serde_json::from_value::<RagResult>(value)?;
    print!("{}", render::render_answer(&result));
    Ok(())
}

async fn run_upload(base_url: &str, files: &[PathBuf], use_ocr: bool, clear_kb: bool) -> Result<(), CliError> {
    let mut form = Form::new();
    let mut attached = 0_usize;
    for path in files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if !transcript::ingest::is_accepted(&name) {
            tracing::warn!(file = %path.display(), "skipping unsupported file type");
            continue;
        }
        let bytes = tokio::fs::read(path).await.map_err(|source| CliError::Io {
            path: path.display().to_string(),
            source,
        })?;
        form = form.part("files", Part::bytes(bytes).file_name(name));
        attached += 1;
    }
    if attached == 0 {
        return Err(CliError::NoFiles);
    }
    let form = form
        .text("use_ocr", use_ocr.to_string())
        .text("clear_kb", clear_kb.to_string());

    tracing::info!(files = attached, use_ocr, clear_kb, "uploading");
    print_json(&post_rag(base_url, form).await?)
}

async fn post_rag(base_url: &str, form: Form) -> Result<Value, CliError> {
    let response = reqwest::Client::new()
        .post(endpoint(base_url, "/api/rag"))
        .multipart(form)
        .send()
        .await?;
    read_json(response).await
}

async fn get_json(base_url: &str, path: &str) -> Result<Value, CliError> {
    let response = reqwest::Client::new().get(endpoint(base_url, path)).send().await?;
    read_json(response).await
}

async fn read_json(response: reqwest::Response) -> Result<Value, CliError> {
    let status = response.status();
    let value = response
        .json::<Value>()
        .await
        .unwrap_or_else(|_| Value::Null);

    if !status.is_success() {
        let message = match value.get("detail") {
            Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
            Some(Value::Null | Value::String(_)) | None => "Failed to process request".to_owned(),
            Some(other) => other.to_string(),
        };
        return Err(CliError::ServerError {
            status: status.as_u16(),
            message,
        });
    }

    Ok(value)
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

fn read_input(path: &str) -> Result<String, CliError> {
    input::read_input(path).map_err(|source| CliError::Io {
        path: path.to_owned(),
        source,
    })
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
