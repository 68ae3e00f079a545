use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::error;

use physiolog::{
    save_trace_png, LogFile, PhysioLogError, PhysioParser, PlotStyle, PrismaParser, TriggerMarkers,
    TrioParser,
};

#[derive(Parser)]
#[command(name = "physiolog")]
#[command(about = "Parse Siemens Trio/Prisma physio log files into a time-stamped trace")]
struct Cli {
    /// Path to the log file (.puls / .resp)
    file: PathBuf,

    /// Log format generation
    #[arg(long, value_enum)]
    format: Format,

    /// Trigger marker revision (Trio logs only; Prisma always uses extended)
    #[arg(long, value_enum, default_value = "classic")]
    markers: Markers,

    /// Write a PNG rendering of the trace to this path
    #[arg(long)]
    plot: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Trio,
    Prisma,
}

#[derive(Clone, Copy, ValueEnum)]
enum Markers {
    Classic,
    Extended,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        // Distinguished status for an unrecognized log subtype, so scripted
        // callers can tell "not one of ours" from a broken file.
        Err(err) => match err.downcast_ref::<PhysioLogError>() {
            Some(PhysioLogError::UnrecognizedFormat { .. }) => {
                error!("{err}");
                ExitCode::from(2)
            }
            _ => {
                error!("{err:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let file = LogFile::read(&cli.file)
        .with_context(|| format!("reading {}", cli.file.display()))?;

    let parsed = match cli.format {
        Format::Trio => {
            let markers = match cli.markers {
                Markers::Classic => TriggerMarkers::Classic,
                Markers::Extended => TriggerMarkers::Extended,
            };
            TrioParser::new(markers).parse(&file)?
        }
        Format::Prisma => PrismaParser.parse(&file)?,
    };

    println!(
        "{}: {} samples at {:.2} Hz ({:.2} sec)",
        file.display_label(),
        parsed.trace.len(),
        parsed.trace.sample_rate_hz,
        parsed.trace.duration_seconds()
    );

    if let Some(output) = &cli.plot {
        save_trace_png(
            &parsed.trace,
            &file.display_label(),
            &PlotStyle::default(),
            output,
        )?;
        println!("wrote {}", output.display());
    }
    Ok(())
}
