//! Report output for the `hash` and `compare` commands.

use std::io::{self, Write};

use crate::models::{ComparisonReport, FileReport, OutputFormat};

/// Write one line (text) or one array (JSON) of file fingerprints.
pub fn write_hashes<W: Write>(
    out: &mut W,
    reports: &[FileReport],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            for report in reports {
                write_text_line(out, report)?;
            }
            Ok(())
        }
        OutputFormat::Json => write_json(out, reports),
    }
}

/// Write both files' fingerprints followed by their distances.
///
/// The text distance line keeps each value under its hash column:
/// `GG                 MM`, zero padded to two digits.
pub fn write_comparison<W: Write>(
    out: &mut W,
    report: &ComparisonReport,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            for file in &report.files {
                write_text_line(out, file)?;
            }
            writeln!(
                out,
                "{:02}                 {:02}",
                report.distance.gradient, report.distance.mean
            )
        }
        OutputFormat::Json => write_json(out, report),
    }
}

fn write_text_line<W: Write>(out: &mut W, report: &FileReport) -> io::Result<()> {
    writeln!(out, "{} {}", report.gradient, report.mean)
}

fn write_json<W: Write, T: serde::Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}
