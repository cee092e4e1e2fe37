use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use tracing::{debug, info};

use ribos::cli::{self, RunCounts};
use ribos::config::TranslationConfig;
use ribos::fasta::{FastaRecord, read_fasta};
use ribos::feature::Feature;
use ribos::genetic_code::{self, DEFAULT_TABLE_ID};
use ribos::translation::{TranslationResult, Translator};

/// Residues per line in the protein FASTA output.
const LINE_WIDTH: usize = 60;

#[derive(Parser)]
#[command(
    name = "translate_cds",
    about = "Translate coding sequences with an NCBI genetic code"
)]
struct Cli {
    /// Nucleotide FASTA input (plain or gzip)
    #[arg(short = 'f', long = "fasta")]
    fasta: PathBuf,

    /// Path to the JSON configuration file
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// NCBI genetic code table id (overrides the config)
    #[arg(short = 't', long = "transl-table")]
    transl_table: Option<u32>,

    /// Offset of the first complete codon (1, 2 or 3)
    #[arg(long = "codon-start", default_value_t = 1)]
    codon_start: i32,

    /// The sequence lacks its start codon
    #[arg(long = "five-prime-partial")]
    five_prime_partial: bool,

    /// The sequence lacks its stop codon
    #[arg(long = "three-prime-partial")]
    three_prime_partial: bool,

    /// Treat the feature as a pseudogene
    #[arg(long = "pseudo")]
    pseudo: bool,

    /// Treat the feature as a mature peptide (no stop codon expected)
    #[arg(long = "peptide")]
    peptide: bool,

    /// Internal stop codons are an annotated exception
    #[arg(long = "exception")]
    exception: bool,

    /// Position override, e.g. '(pos:7..9,aa:Sec)'
    #[arg(long = "transl-except")]
    transl_except: Vec<String>,

    /// Codon override, e.g. '(seq:"TGA",aa:Trp)'
    #[arg(long = "codon")]
    codon: Vec<String>,

    /// Enable every auto-fix
    #[arg(long = "fix-all")]
    fix_all: bool,

    /// Declared translation to compare against (without the stop marker)
    #[arg(long = "expected")]
    expected: Option<String>,

    /// Tracing filter, e.g. 'debug' or 'ribos=trace'
    #[arg(long = "log-level", default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let start = Instant::now();
    let cli_args = Cli::parse();
    init_tracing(&cli_args.log_level)?;

    cli::banner("Translate CDS");

    // ── Configuration ────────────────────────────────────
    cli::section("Configuration");

    let config = match &cli_args.config {
        Some(path) => {
            cli::kv("Config", &path.display().to_string());
            TranslationConfig::from_file(path)?
        }
        None => TranslationConfig::default(),
    };

    let table_id = cli_args
        .transl_table
        .or(config.transl_table)
        .unwrap_or(DEFAULT_TABLE_ID);
    let table = genetic_code::table(table_id)
        .with_context(|| format!("invalid --transl-table: {table_id}"))?;
    cli::kv("Genetic code", &table.to_string());
    cli::kv("Codon start", &cli_args.codon_start.to_string());

    let translator = build_translator(&cli_args, table_id, &config)?;
    if translator.fixes().any_enabled() {
        cli::kv("Fixes", &format!("{:?}", translator.fixes()));
    }
    cli::kv("Input", &cli_args.fasta.display().to_string());

    eprintln!();

    // ── Translation ──────────────────────────────────────
    cli::section("Translation");

    let records = read_fasta(&cli_args.fasta)
        .with_context(|| format!("failed to read FASTA: {}", cli_args.fasta.display()))?;
    info!(records = records.len(), "read FASTA input");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut counts = RunCounts::default();

    for record in &records {
        let result = translator.translate(&record.sequence);
        counts.records += 1;
        report_record(record, &result, cli_args.expected.as_deref(), &mut counts);
        write_protein(&mut out, record, &result).context("failed to write translation")?;
    }
    out.flush().context("failed to write translation")?;

    cli::print_summary(start, &counts);

    if counts.invalid > 0 {
        bail!("{} of {} records failed translation", counts.invalid, counts.records);
    }
    Ok(())
}

fn build_translator(cli_args: &Cli, table_id: u32, config: &TranslationConfig) -> Result<Translator> {
    let feature_type = if cli_args.peptide { "mat_peptide" } else { "CDS" };
    let mut feature = Feature::new(feature_type)
        .with_attribute("transl_table", &table_id.to_string())
        .with_attribute("codon_start", &cli_args.codon_start.to_string());
    if cli_args.pseudo {
        feature.add_attribute("pseudo", "");
    }
    if cli_args.exception {
        feature.add_attribute("exception", "");
    }
    for value in &cli_args.transl_except {
        feature.add_attribute("transl_except", value);
    }
    for value in &cli_args.codon {
        feature.add_attribute("codon", value);
    }

    let mut translator =
        Translator::from_feature(&feature).context("invalid feature attributes")?;
    translator.set_five_prime_partial(cli_args.five_prime_partial);
    translator.set_three_prime_partial(cli_args.three_prime_partial);
    translator.set_fixes(config.fixes);
    if cli_args.fix_all {
        translator.enable_all_fixes();
    }
    debug!(?translator, "configured translator");
    Ok(translator)
}

fn report_record(
    record: &FastaRecord,
    result: &TranslationResult,
    expected: Option<&str>,
    counts: &mut RunCounts,
) {
    let summary = format!(
        "{} ({} aa, {} bp)",
        record.id,
        result.translation_length(),
        result.translation_base_count()
    );

    if result.has_errors() {
        counts.invalid += 1;
        cli::failure(&summary);
        for error in result.errors() {
            eprintln!("      {}", error.to_string().red());
        }
    } else if result.is_fixed() {
        counts.fixed += 1;
        cli::warning(&format!("{summary} {}", fixed_flags(result).dimmed()));
    } else {
        counts.valid += 1;
        cli::success(&summary);
    }

    if let Some(expected) = expected {
        let comparison = result.compare_with(expected);
        if comparison.matches {
            cli::kv("Expected", "match");
        } else {
            cli::warning(&format!(
                "{}: translation differs from expected ({} X mismatches)",
                record.id, comparison.x_mismatch_count
            ));
        }
    }
}

fn fixed_flags(result: &TranslationResult) -> String {
    let flags = [
        (result.fixed_five_prime_partial, "5' partial"),
        (result.fixed_three_prime_partial, "3' partial"),
        (result.fixed_pseudo, "pseudo"),
        (result.fixed_degenerate_start_codon, "degenerate start"),
        (result.fixed_trailing_bases, "trailing bases"),
    ];
    let applied: Vec<&str> = flags
        .iter()
        .filter(|(applied, _)| *applied)
        .map(|(_, name)| *name)
        .collect();
    format!("[fixed: {}]", applied.join(", "))
}

fn write_protein<W: Write>(out: &mut W, record: &FastaRecord, result: &TranslationResult) -> io::Result<()> {
    if record.description.is_empty() {
        writeln!(out, ">{}", record.id)?;
    } else {
        writeln!(out, ">{} {}", record.id, record.description)?;
    }
    let protein = result.conceptual_translation();
    for line in protein.as_bytes().chunks(LINE_WIDTH) {
        out.write_all(line)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt};

    let filter =
        EnvFilter::try_new(level).with_context(|| format!("invalid log level '{level}'"))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
    Ok(())
}
