//! textcycle CLI - regroup headed bullet lists into round-robin cycles

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use textcycle::{
    process_batch, BatchInput, BatchOptions, JsonFormat, OutputFormat, ParseOptions, Textcycle,
};

const SAMPLE_INPUT: &str = "Heading 1\n\
\u{2022} Point 1\n\
\u{2022} Point 2\n\
\u{2022} Point 3\n\
\u{2022} Point 4\n\
\n\
Heading 2\n\
\u{2022} Item A\n\
\u{2022} Item B\n\
\u{2022} Item C\n\
\u{2022} Item D\n\
\n\
Heading 3\n\
\u{2022} Task 1\n\
\u{2022} Task 2\n\
\u{2022} Task 3\n\
\u{2022} Task 4";

#[derive(Parser)]
#[command(name = "textcycle")]
#[command(version)]
#[command(about = "Regroup headed bullet lists into fixed-size cycles", long_about = None)]
struct Cli {
    /// Input text file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Points per heading per cycle
    #[arg(short = 'n', long, default_value = "2")]
    points_per_cycle: usize,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Process one file and print or save the result
    Process {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Points per heading per cycle
        #[arg(short = 'n', long, default_value = "2")]
        points_per_cycle: usize,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: Format,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Accumulate repeated headings instead of resetting them
        #[arg(long)]
        append_duplicates: bool,

        /// Drop unheaded lines instead of using the first line as a heading
        #[arg(long)]
        no_implicit_heading: bool,
    },

    /// Process several files independently; one failure never aborts the rest
    Batch {
        /// Input text files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory (next to each input if not specified)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Points per heading per cycle
        #[arg(short = 'n', long, default_value = "2")]
        points_per_cycle: usize,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Print a sample input document
    Sample,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Canonical cycle text
    Text,
    /// Markdown with cycle and section headings
    Markdown,
    /// JSON cycle structure
    Json,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Text => "txt",
            Format::Markdown => "md",
            Format::Json => "json",
        }
    }
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Markdown => OutputFormat::Markdown,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Process {
            input,
            output,
            points_per_cycle,
            format,
            compact,
            append_duplicates,
            no_implicit_heading,
        }) => cmd_process(
            &input,
            output.as_deref(),
            points_per_cycle,
            format,
            compact,
            append_duplicates,
            no_implicit_heading,
        ),
        Some(Commands::Batch {
            inputs,
            output,
            points_per_cycle,
            format,
        }) => cmd_batch(&inputs, output.as_deref(), points_per_cycle, format),
        Some(Commands::Sample) => {
            println!("{}", SAMPLE_INPUT);
            Ok(())
        }
        None => {
            if let Some(input) = cli.input {
                cmd_process(
                    &input,
                    None,
                    cli.points_per_cycle,
                    Format::Text,
                    false,
                    false,
                    false,
                )
            } else {
                println!("{}", "Usage: textcycle <FILE> [-n POINTS]".yellow());
                println!("       textcycle --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn parse_options(append_duplicates: bool, no_implicit_heading: bool) -> ParseOptions {
    let mut options = ParseOptions::new();
    if append_duplicates {
        options = options.append_duplicates();
    }
    if no_implicit_heading {
        options = options.strict_headings();
    }
    options
}

fn cmd_process(
    input: &Path,
    output: Option<&Path>,
    points_per_cycle: usize,
    format: Format,
    compact: bool,
    append_duplicates: bool,
    no_implicit_heading: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(input)?;

    let processed = Textcycle::new()
        .points_per_cycle(points_per_cycle)
        .with_parse_options(parse_options(append_duplicates, no_implicit_heading))
        .process(&text)?;

    let rendered = match format {
        Format::Text => processed.to_text(),
        Format::Markdown => processed.to_markdown(),
        Format::Json => {
            let json_format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            processed.to_json(json_format)?
        }
    };

    if let Some(path) = output {
        fs::write(path, &rendered)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", rendered);
    }

    Ok(())
}

fn cmd_batch(
    inputs: &[PathBuf],
    output_dir: Option<&Path>,
    points_per_cycle: usize,
    format: Format,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(dir) = output_dir {
        fs::create_dir_all(dir)?;
    }

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Reading files...");
    let mut batch_inputs = Vec::with_capacity(inputs.len());
    for path in inputs {
        let name = path.display().to_string();
        // Unreadable files become error markers, same as malformed content
        let text = fs::read_to_string(path).unwrap_or_default();
        batch_inputs.push(BatchInput::new(name, text));
    }

    pb.set_message("Processing...");
    let options = BatchOptions::new().with_format(format.into());
    let items = process_batch(&batch_inputs, points_per_cycle, &options);

    let mut failures = 0usize;
    for (path, item) in inputs.iter().zip(&items) {
        pb.inc(1);
        match &item.result {
            Ok(rendered) => {
                let out_path = batch_output_path(path, output_dir, format);
                fs::write(&out_path, rendered)?;
                pb.println(format!(
                    "{} {} -> {}",
                    "ok".green().bold(),
                    item.name,
                    out_path.display()
                ));
            }
            Err(message) => {
                failures += 1;
                pb.println(format!("{} {}: {}", "failed".red().bold(), item.name, message));
            }
        }
    }
    pb.finish_with_message("Done");

    println!(
        "\n{} {} succeeded, {} failed",
        "Batch:".bold(),
        items.len() - failures,
        failures
    );

    if failures == items.len() && !items.is_empty() {
        return Err("all documents failed".into());
    }
    Ok(())
}

fn batch_output_path(input: &Path, output_dir: Option<&Path>, format: Format) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let file_name = format!("{}_cycles.{}", stem, format.extension());
    match output_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}
