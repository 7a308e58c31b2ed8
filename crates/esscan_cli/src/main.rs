//! esscan: Dump the token stream of an ECMAScript file.
//!
//! Usage:
//!   esscan [options] <file>
//!
//! Prints one line per token. A fatal scan error is rendered against the
//! source and the process exits with status 1.

use clap::Parser as ClapParser;
use esscan_core::LineMap;
use esscan_diagnostics::Diagnostic;
use esscan_scanner::{ScanError, ScannerOptions, TokenInfo, TokenStream};
use miette::{IntoDiagnostic, NamedSource, SourceSpan, WrapErr};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

#[derive(ClapParser, Debug)]
#[command(name = "esscan", about = "esscan - tokenize ECMAScript source", version)]
struct Cli {
    /// Source file to scan.
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Scan as strict mode code.
    #[arg(long)]
    strict: bool,

    /// Print the raw source text of each token next to its cooked value.
    #[arg(long)]
    raw: bool,

    /// Scan a leading `#!` line as ordinary tokens.
    #[arg(long = "no-hashbang")]
    no_hashbang: bool,
}

/// A fatal scan error with the source it was found in.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error("ES{code}: {message}")]
struct ScanReport {
    code: u32,
    message: String,
    #[source_code]
    source_code: NamedSource<String>,
    #[label("here")]
    span: SourceSpan,
    #[help]
    location: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(report) = run(&cli) {
        eprintln!("{:?}", report);
        process::exit(1);
    }
}

/// Enable with `RUST_LOG=esscan_scanner=trace`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn run(cli: &Cli) -> miette::Result<()> {
    let bytes = std::fs::read(&cli.file)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", cli.file.display()))?;
    let source = simdutf8::basic::from_utf8(&bytes)
        .map_err(|_| miette::miette!("{} is not valid UTF-8", cli.file.display()))?;

    let options = ScannerOptions {
        strict: cli.strict,
        skip_hashbang: !cli.no_hashbang,
    };
    tracing::debug!(file = %cli.file.display(), len = source.len(), ?options, "scanning");

    let line_map = LineMap::new(source);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut stream = TokenStream::with_options(source, options);
    let mut count = 0usize;

    while let Some(result) = stream.next() {
        match result {
            Ok(info) => {
                print_token(&mut out, &line_map, &info, cli.raw).into_diagnostic()?;
                count += 1;
            }
            Err(err) => {
                out.flush().into_diagnostic()?;
                let diagnostic = stream.scanner().diagnostics().last().cloned();
                return Err(scan_report(cli, source, err, diagnostic).into());
            }
        }
    }
    out.flush().into_diagnostic()?;
    tracing::debug!(count, "scan finished");
    Ok(())
}

fn print_token(
    out: &mut impl Write,
    line_map: &LineMap,
    info: &TokenInfo,
    raw: bool,
) -> io::Result<()> {
    let location = line_map.line_and_column_of(info.range.pos);
    let kind = info.kind.to_string();
    match (&info.value, raw) {
        (Some(value), false) => writeln!(out, "{}\t{}\t{:?}", location, kind, value),
        (Some(value), true) => writeln!(out, "{}\t{}\t{:?}\t{:?}", location, kind, value, info.raw),
        (None, _) => writeln!(out, "{}\t{}\t<invalid escape>\t{:?}", location, kind, info.raw),
    }
}

fn scan_report(
    cli: &Cli,
    source: &str,
    err: ScanError,
    diagnostic: Option<Diagnostic>,
) -> ScanReport {
    let (code, message, span) = match diagnostic {
        Some(diag) => {
            let span = SourceSpan::from((diag.span.start as usize, diag.span.length as usize));
            (diag.code, diag.message_text, span)
        }
        None => (0, err.kind.to_string(), SourceSpan::from((err.pos, 0))),
    };
    ScanReport {
        code,
        message,
        source_code: NamedSource::new(cli.file.display().to_string(), source.to_owned()),
        span,
        location: Some(format!("{} at {}", err.kind, err.location)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dump(source: &str, raw: bool) -> String {
        let line_map = LineMap::new(source);
        let mut out = Vec::new();
        for info in TokenStream::new(source) {
            print_token(&mut out, &line_map, &info.unwrap(), raw).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_token_lines() {
        assert_eq!(
            dump("let s =\n  `a\\x41`;", false),
            "1:1\tkeyword 'let'\t\"let\"\n\
             1:5\tIdentifier\t\"s\"\n\
             1:7\t'='\t\"\"\n\
             2:3\tTemplateTail\t\"aA\"\n\
             2:10\t';'\t\"\"\n"
        );
    }

    #[test]
    fn test_raw_and_abandoned_values() {
        assert_eq!(
            dump("tag`\\u{zz}`", true),
            "1:1\tIdentifier\t\"tag\"\t\"tag\"\n\
             1:4\tTemplateTail\t<invalid escape>\t\"\\\\u{zz}\"\n"
        );
    }

    #[test]
    fn test_scan_report_uses_catalog_diagnostic() {
        let cli = Cli {
            file: PathBuf::from("input.js"),
            strict: false,
            raw: false,
            no_hashbang: false,
        };
        let source = "a = `open";
        let mut stream = TokenStream::new(source);
        let err = stream.find_map(Result::err).unwrap();
        let diagnostic = stream.scanner().diagnostics().last().cloned();
        let report = scan_report(&cli, source, err, diagnostic);
        assert_eq!(report.code, 1126);
        assert_eq!(report.to_string(), "ES1126: Unexpected end of text.");
        assert_eq!(report.span, SourceSpan::from((9, 0)));
    }
}
