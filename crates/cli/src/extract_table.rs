//! extract-table - Rebuild a table from OCR word boxes
//!
//! Reads JSON dumps of positioned text boxes (as written by the OCR step,
//! one array of `{XLeft, XRight, YTop, YBottom, Content}` records per file)
//! and prints the reconstructed table.

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use boxtable_core::table::{
    ColumnSplit, StrategyKind, TableSettings, TextBox, extract_table, to_table,
};
use clap::{ArgAction, Parser, ValueEnum};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Reconstruction strategy.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
enum Strategy {
    /// Rows and columns from merged box projections (default)
    #[default]
    Regions,
    /// Rows by vertical overlap, columns at the widest horizontal gaps
    GapSplit,
}

impl From<Strategy> for StrategyKind {
    fn from(s: Strategy) -> Self {
        match s {
            Strategy::Regions => StrategyKind::Regions,
            Strategy::GapSplit => StrategyKind::GapSplit,
        }
    }
}

/// Output type for the reconstructed table.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputType {
    /// Aligned columns separated by " | " (default)
    #[default]
    Text,
    /// JSON array of rows, one document per input file
    Json,
}

/// Rebuild a table from the word boxes an OCR service detected.
#[derive(Parser, Debug)]
#[command(name = "extract-table")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// One or more JSON box files, or "-" for stdin
    #[arg(required = true)]
    files: Vec<String>,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// Reconstruction strategy
    #[arg(short = 's', long, value_enum, default_value = "regions")]
    strategy: Strategy,

    /// Number of columns for the gap-split strategy
    #[arg(short = 'n', long, default_value = "3")]
    columns: usize,

    /// Split at every gap at least this wide (gap-split; overrides --columns)
    #[arg(long = "min-gap")]
    min_gap: Option<f64>,

    /// Type of output to generate
    #[arg(short = 't', long = "output-type", value_enum, default_value = "text")]
    output_type: OutputType,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Also write the synthesized cell boxes as JSON (regions strategy)
    #[arg(long)]
    cells: Option<PathBuf>,
}

fn init_logging(debug: bool) {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

/// Build table settings from command line arguments.
fn build_settings(args: &Args) -> TableSettings {
    let column_split = match args.min_gap {
        Some(width) => ColumnSplit::MinGap(width),
        None => ColumnSplit::Count(args.columns),
    };
    TableSettings {
        strategy: args.strategy.into(),
        column_split,
    }
}

fn read_boxes(path: &str) -> Result<Vec<TextBox>> {
    let data = if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?
    };
    serde_json::from_str(&data).with_context(|| format!("failed to parse boxes in {path}"))
}

/// Render rows as aligned text columns.
fn render_text(rows: &[Vec<String>]) -> String {
    let n_cols = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; n_cols];
    for row in rows {
        for (j, cell) in row.iter().enumerate() {
            widths[j] = widths[j].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(" | ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn write_rows<W: Write>(
    writer: &mut W,
    rows: &[Vec<String>],
    output_type: OutputType,
) -> Result<()> {
    match output_type {
        OutputType::Text => writer.write_all(render_text(rows).as_bytes())?,
        OutputType::Json => {
            serde_json::to_writer(&mut *writer, rows)?;
            writer.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Process a single box file.
fn process_file<W: Write>(path: &str, writer: &mut W, args: &Args) -> Result<()> {
    let boxes = read_boxes(path)?;
    info!(path, boxes = boxes.len(), "read boxes");
    let settings = build_settings(args);

    let rows = match settings.strategy {
        StrategyKind::Regions => {
            let extraction = to_table(&boxes).with_context(|| path.to_string())?;
            if let Some(cells_path) = &args.cells {
                let json = serde_json::to_string_pretty(&extraction.cells)?;
                fs::write(cells_path, json)
                    .with_context(|| format!("failed to write {}", cells_path.display()))?;
                debug!(path = %cells_path.display(), "wrote cell boxes");
            }
            extraction.rows
        }
        StrategyKind::GapSplit => {
            if args.cells.is_some() {
                warn!("--cells only applies to the regions strategy; ignored");
            }
            extract_table(&boxes, &settings).with_context(|| path.to_string())?
        }
    };

    write_rows(writer, &rows, args.output_type)
}

fn run(args: &Args) -> Result<()> {
    if args.cells.is_some() && args.files.len() > 1 {
        bail!("--cells needs exactly one input file");
    }

    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .with_context(|| format!("failed to create output file {}", args.outfile))?;
        Box::new(BufWriter::new(file))
    };

    for (i, path) in args.files.iter().enumerate() {
        if i > 0 && matches!(args.output_type, OutputType::Text) {
            output.write_all(b"\n")?;
        }
        process_file(path, &mut output, args)?;
    }

    output.flush()?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.debug);

    if let Err(e) = run(&args) {
        eprintln!("extract-table: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn render_text_aligns_columns() {
        let table = rows(&[&["Name", "Qty", ""], &["Green apple", "3", "1.20"]]);
        assert_eq!(
            render_text(&table),
            "Name        | Qty |\nGreen apple | 3   | 1.20\n"
        );
    }

    #[test]
    fn render_text_empty_table() {
        assert_eq!(render_text(&[]), "");
    }

    #[test]
    fn json_output_is_one_line_per_table() {
        let mut buf = Vec::new();
        write_rows(&mut buf, &rows(&[&["A", "B"]]), OutputType::Json).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[[\"A\",\"B\"]]\n");
    }

    #[test]
    fn min_gap_overrides_column_count() {
        let args = Args::parse_from([
            "extract-table",
            "-s",
            "gap-split",
            "--min-gap",
            "0.05",
            "x.json",
        ]);
        let settings = build_settings(&args);
        assert_eq!(settings.strategy, StrategyKind::GapSplit);
        assert_eq!(settings.column_split, ColumnSplit::MinGap(0.05));

        let args = Args::parse_from(["extract-table", "-n", "4", "x.json"]);
        let settings = build_settings(&args);
        assert_eq!(settings.strategy, StrategyKind::Regions);
        assert_eq!(settings.column_split, ColumnSplit::Count(4));
    }
}
