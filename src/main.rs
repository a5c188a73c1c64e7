use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use rostrum::{
    extract_date_from_filename, read_transcript, segment, HumanDocument, MachineDocument,
    ScanConfig, SegmentConfig,
};

#[derive(Parser)]
#[command(name = "rostrum")]
#[command(author, version, about = "Speech-turn segmentation for OCR-derived legislative records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Segment a transcript into attributed speech turns
    Process {
        /// Input transcript file (plain text)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for machine-readable turns (JSON)
        #[arg(short, long)]
        output: PathBuf,

        /// Output file for human-readable turns (text)
        #[arg(long)]
        human_readable: Option<PathBuf>,

        /// Skip debate-title detection and assignment
        #[arg(long)]
        no_titles: bool,

        /// Skip the fuzzy boilerplate-line filter
        #[arg(long)]
        no_boilerplate_filter: bool,

        /// Tab width for the deep-indent heading terminator
        #[arg(long, default_value = "2")]
        tab_width: usize,

        /// Minimum indentation of a right-justified date line
        #[arg(long, default_value = "15")]
        date_indent: usize,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze a transcript without writing output
    Analyze {
        /// Input transcript file (plain text)
        #[arg(short, long)]
        input: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            input,
            output,
            human_readable,
            no_titles,
            no_boilerplate_filter,
            tab_width,
            date_indent,
            verbose,
        } => {
            setup_logging(verbose);
            let config = SegmentConfig {
                scan: ScanConfig {
                    tab_width,
                    date_indent_threshold: date_indent,
                },
                skip_titles: no_titles,
                skip_boilerplate_filter: no_boilerplate_filter,
            };
            process_transcript(input, output, human_readable, &config)
        }
        Commands::Analyze { input, verbose } => {
            setup_logging(verbose);
            analyze_transcript(input)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn process_transcript(
    input: PathBuf,
    output: PathBuf,
    human_readable: Option<PathBuf>,
    config: &SegmentConfig,
) -> Result<()> {
    info!("Loading transcript from {:?}", input);
    let text = read_transcript(&input)?;

    let filename = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let date = match extract_date_from_filename(&filename) {
        Ok(parsed) => Some((parsed.iso(), parsed.decade)),
        Err(err) => {
            warn!("No proceeding date in filename: {err}");
            None
        }
    };

    let result = segment(&text, config).context("Segmentation failed")?;
    info!(
        "Segmented {} turns, {} title blocks",
        result.turns.len(),
        result.title_blocks.len()
    );

    let doc = MachineDocument::from_result(&filename, date, &result);
    doc.write_json(&output)?;
    info!("Output written to {:?}", output);

    if let Some(human_path) = human_readable {
        HumanDocument::new(&result.turns).write_file(&human_path)?;
        info!("Human-readable output written to {:?}", human_path);
    }

    Ok(())
}

fn analyze_transcript(input: PathBuf) -> Result<()> {
    info!("Analyzing transcript from {:?}", input);
    let text = read_transcript(&input)?;
    let result = segment(&text, &SegmentConfig::default()).context("Segmentation failed")?;

    println!("Transcript Analysis");
    println!("==================");
    println!("Transcript length: {} bytes", result.prepared_len);
    println!("Total turns: {}", result.turns.len());
    println!("Title blocks: {}", result.title_blocks.len());
    println!();

    println!("Titles");
    println!("------");
    for block in &result.title_blocks {
        println!("{}", block.title().replace('\n', " / "));
    }
    println!();

    println!("Speaker Statistics");
    println!("------------------");
    let mut speakers: Vec<&str> = result.turns.iter().map(|t| t.speaker.as_str()).collect();
    speakers.sort();
    speakers.dedup();

    for speaker in speakers {
        let turns: Vec<_> = result.turns.iter().filter(|t| t.speaker == speaker).collect();
        let words: usize = turns.iter().map(|t| t.word_count()).sum();
        let chambers: Vec<&str> = {
            let mut c: Vec<&str> = turns
                .iter()
                .map(|t| t.chamber.as_str())
                .filter(|c| !c.is_empty())
                .collect();
            c.sort();
            c.dedup();
            c
        };
        println!(
            "{}: {} turns, {} words, chamber {:?}",
            speaker,
            turns.len(),
            words,
            chambers
        );
    }

    Ok(())
}
