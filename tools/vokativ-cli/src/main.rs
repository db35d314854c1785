mod analyse;
mod compile;

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rkyv::ser::{serializers::AllocSerializer, Serializer};
use tracing::info;
use tracing_subscriber::EnvFilter;
use vokativ_parser::NameDatabase;
use vokativ_protocol::{Gender, NameList};
use vokativ_solver::{Config, FullNameAnalyser};

#[derive(Parser)]
#[command(author, version, about = "Czech and Slovak full-name analysis")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compiles a JSON first-name list to an rkyv archive
    Compile {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Analyses a full name and prints the result as JSON
    Analyse {
        /// cs or sk
        #[arg(short, long, default_value = "cs")]
        language: String,

        /// CZ or SK
        #[arg(short, long, default_value = "CZ")]
        country: String,

        /// informal or formal
        #[arg(short, long, default_value = "informal")]
        form: String,

        /// male or female; inferred when omitted
        #[arg(short, long)]
        gender: Option<String>,

        /// First-name archive to use instead of the built-in list
        #[arg(short, long, value_name = "FILE")]
        names: Option<PathBuf>,

        full_name: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Compile { input, output } => compile(input, output),
        Command::Analyse { language, country, form, gender, names, full_name } => {
            let config = analyse::config(&language, &country, &form)?;
            let gender = analyse::gender(gender.as_deref())?;
            run_analyse(config, names, &full_name, gender)
        }
    }
}

fn compile(input: PathBuf, output: PathBuf) -> anyhow::Result<()> {
    info!(path = ?input, "reading name list");
    let input_data = fs::read_to_string(&input).with_context(|| format!("reading {:?}", input))?;

    let list: NameList = serde_json::from_str(&input_data).context("parsing name list")?;
    let raw = list.entries.len();
    let list = compile::clean(list);

    info!(version = list.version, raw, names = list.entries.len(), "compiling name list");

    let mut serializer = AllocSerializer::<256>::default();
    serializer
        .serialize_value(&list)
        .map_err(|e| anyhow::anyhow!("rkyv serialization failed: {:?}", e))?;
    let bytes = serializer.into_serializer().into_inner();

    fs::write(&output, bytes).with_context(|| format!("writing {:?}", output))?;

    println!("Compiled {} names to {:?}", list.entries.len(), output);
    Ok(())
}

fn run_analyse(config: Config, names: Option<PathBuf>, full_name: &str, gender: Option<Gender>) -> anyhow::Result<()> {
    let analyser = match names {
        Some(path) => {
            let bytes = fs::read(&path).with_context(|| format!("reading {:?}", path))?;
            let names = NameDatabase::from_archive(&bytes)?;
            FullNameAnalyser::with_parts(config, Arc::new(names), Default::default())
        }
        None => FullNameAnalyser::new(config),
    };

    println!("{}", analyse::to_json(&analyser, full_name, gender)?);
    Ok(())
}
