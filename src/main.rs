//! csv-glance CLI - column statistics for CSV files

use clap::Parser;
use csv_glance::{
    Analysis, ColumnStats, ColumnSummary, GlanceError, Quote, Session, TableReader,
    ValueFrequency,
};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Width of the longest bar in the distribution charts.
const BAR_WIDTH: usize = 40;

/// Per-column descriptive statistics for CSV files.
///
/// Classifies each column as numeric or text and reports counts, uniqueness,
/// nulls and numeric aggregates, followed by value distributions and a preview
/// of the first rows.
#[derive(Parser, Debug)]
#[command(name = "csv-glance")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input CSV file(s) to analyze
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Field delimiter (single character)
    #[arg(short = 'd', long, default_value = ",")]
    delimiter: char,

    /// Quote character (single character, or 'none')
    #[arg(short = 'q', long)]
    quote: Option<String>,

    /// Stop reading after this many records
    #[arg(short = 'n', long)]
    max_records: Option<usize>,

    /// Output format: text (default) or json
    #[arg(short = 'f', long, default_value = "text")]
    format: OutputFormat,

    /// Number of rows to show in the preview
    #[arg(short = 'p', long, default_value_t = csv_glance::PREVIEW_ROWS)]
    preview: usize,

    /// Number of columns to chart in the distribution section
    #[arg(short = 'c', long, default_value = "4")]
    charts: usize,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    let mut session = match build_reader(&args) {
        Ok(reader) => Session::with_reader(reader),
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut exit_code = ExitCode::SUCCESS;

    for file in &args.files {
        match session.load_path(file) {
            Ok(analysis) => match args.format {
                OutputFormat::Text => print_text_output(analysis, &args),
                OutputFormat::Json => {
                    if let Err(e) = print_json_output(analysis, &args) {
                        eprintln!("Error processing {}: {}", file.display(), e);
                        exit_code = ExitCode::FAILURE;
                    }
                }
            },
            Err(e) => {
                eprintln!("Error processing {}: {}", file.display(), e);
                exit_code = ExitCode::FAILURE;
            }
        }
    }

    exit_code
}

fn init_logger(verbose: bool) {
    let default = if verbose {
        "csv_glance=debug"
    } else {
        "csv_glance=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn build_reader(args: &Args) -> Result<TableReader, GlanceError> {
    let mut reader = TableReader::new();
    reader
        .delimiter(ascii_byte("delimiter", args.delimiter)?)
        .max_records(args.max_records);

    if let Some(ref quote_str) = args.quote {
        reader.quote(parse_quote(quote_str)?);
    }

    Ok(reader)
}

/// Accepts `none` (any case) or exactly one ASCII character.
fn parse_quote(s: &str) -> Result<Quote, GlanceError> {
    if s.eq_ignore_ascii_case("none") {
        return Ok(Quote::None);
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Quote::Some(ascii_byte("quote", c)?)),
        _ => Err(GlanceError::InvalidConfig(format!(
            "quote must be a single character or 'none', got {s:?}"
        ))),
    }
}

fn ascii_byte(what: &str, c: char) -> Result<u8, GlanceError> {
    u8::try_from(c)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| GlanceError::InvalidConfig(format!("{what} must be ASCII, got {c:?}")))
}

fn print_text_output(analysis: &Analysis, args: &Args) {
    println!(
        "Loaded: {} ({} rows)",
        analysis.file_name(),
        analysis.row_count()
    );
    println!();

    if analysis.column_stats().is_empty() {
        return;
    }

    println!("Column Statistics");
    for stats in analysis.column_stats() {
        print_stats_card(stats);
    }
    println!();

    println!("Data Distribution (Top 10)");
    for stats in analysis.column_stats().iter().take(args.charts) {
        if let Some(dist) = analysis.distribution(&stats.name) {
            print_bar_chart(&stats.name, &dist);
        }
    }
    println!();

    print_preview(analysis, args.preview);
    println!();
}

fn print_stats_card(stats: &ColumnStats) {
    println!("  {}", stats.name);
    println!("    Type:   {}", stats.column_type());
    println!("    Count:  {}", stats.count);
    println!("    Unique: {}", stats.unique);
    println!("    Nulls:  {}", stats.nulls);
    if let ColumnSummary::Numeric(n) = &stats.summary {
        println!("    Mean:   {:.2}", n.mean);
        println!("    Median: {:.2}", n.median);
        println!("    Min:    {:.2}", n.min);
        println!("    Max:    {:.2}", n.max);
    }
}

fn print_bar_chart(name: &str, dist: &[ValueFrequency]) {
    println!("  {name}");
    let label_width = dist.iter().map(|f| f.value.chars().count()).max().unwrap_or(0);
    let max_count = dist.iter().map(|f| f.count).max().unwrap_or(0).max(1);

    for f in dist {
        let bar = (f.count * BAR_WIDTH).div_ceil(max_count);
        println!(
            "    {:<label_width$} | {} {}",
            f.value,
            "#".repeat(bar),
            f.count
        );
    }
}

fn print_preview(analysis: &Analysis, limit: usize) {
    println!("Data Preview");
    let table = analysis.table();
    let rows = analysis.preview(limit);

    let widths: Vec<usize> = table
        .columns()
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            rows.iter()
                .map(|r| r.get(idx).map_or(0, |v| v.chars().count()))
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = table
        .columns()
        .iter()
        .zip(&widths)
        .map(|(name, &w)| format!("{name:<w$}"))
        .collect();
    println!("  {}", header.join(" | "));

    for row in rows {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(idx, &w)| format!("{:<w$}", row.get(idx).unwrap_or("")))
            .collect();
        println!("  {}", cells.join(" | "));
    }

    if analysis.row_count() > rows.len() {
        println!("  Showing {} of {} rows", rows.len(), analysis.row_count());
    }
}

#[derive(Serialize)]
struct Report<'a> {
    file: &'a str,
    rows: usize,
    columns: &'a [String],
    stats: &'a [ColumnStats],
    distributions: Vec<Distribution<'a>>,
    preview: Vec<Vec<Option<&'a str>>>,
}

#[derive(Serialize)]
struct Distribution<'a> {
    column: &'a str,
    values: Vec<ValueFrequency>,
}

fn print_json_output(analysis: &Analysis, args: &Args) -> serde_json::Result<()> {
    let distributions = analysis
        .column_stats()
        .iter()
        .take(args.charts)
        .filter_map(|s| {
            analysis.distribution(&s.name).map(|values| Distribution {
                column: &s.name,
                values,
            })
        })
        .collect();

    let report = Report {
        file: analysis.file_name(),
        rows: analysis.row_count(),
        columns: analysis.table().columns(),
        stats: analysis.column_stats(),
        distributions,
        preview: analysis
            .preview(args.preview)
            .iter()
            .map(|r| r.iter().collect())
            .collect(),
    };

    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quote() {
        assert_eq!(parse_quote("'").unwrap(), Quote::Some(b'\''));
        assert_eq!(parse_quote("NONE").unwrap(), Quote::None);
        assert_eq!(parse_quote("none").unwrap(), Quote::None);
    }

    #[test]
    fn test_parse_quote_rejects_bad_input() {
        assert!(matches!(parse_quote(""), Err(GlanceError::InvalidConfig(_))));
        assert!(matches!(parse_quote("ab"), Err(GlanceError::InvalidConfig(_))));
        assert!(matches!(parse_quote("é"), Err(GlanceError::InvalidConfig(_))));
    }

    #[test]
    fn test_build_reader_rejects_multi_char_quote() {
        let args = Args::parse_from(["csv-glance", "--quote", "ab", "data.csv"]);
        assert!(matches!(build_reader(&args), Err(GlanceError::InvalidConfig(_))));

        let args = Args::parse_from(["csv-glance", "-d", ";", "-q", "none", "data.csv"]);
        assert!(build_reader(&args).is_ok());
    }
}
