use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use csv;
use serde_json;
use prettytable::Table;

use tripeval::prelude::*;

pub fn print_report(report: &RecallReport) {
    let mut table = Table::new();
    table.add_row(row!["tuple", "arity", "method", "recall"]);
    for s in &report.scores {
        table.add_row(row![s.tuple, s.arity.len(), s.method, format!("{:.4}", s.score)]);
    }
    table.printstd();

    let mut summary = Table::new();
    summary.add_row(row!["arity", "n_tuples", "mean recall"]);
    for &arity in Arity::all().iter() {
        summary.add_row(row![arity.len(), report.n_tuples_of(arity), format!("{:.4}", report.mean_of(arity))]);
    }
    summary.add_row(row!["all", report.scores.len(), format!("{:.4}", report.mean())]);
    summary.printstd();
}

/// Write the scores as JSON when the file name ends with `.json`, as CSV otherwise
pub fn write_report(report: &RecallReport, foutput: &Path) -> Result<()> {
    let writer = BufWriter::new(File::create(foutput)
        .chain_err(|| format!("Cannot create output file: {:?}", foutput))?);

    if foutput.extension().map_or(false, |ext| ext == "json") {
        serde_json::to_writer_pretty(writer, report)?;
    } else {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(&["tuple", "arity", "method", "score"])?;
        for s in &report.scores {
            wtr.write_record(&[s.tuple.to_string(), s.arity.len().to_string(), s.method.to_string(), s.score.to_string()])?;
        }
        wtr.flush()?;
    }

    info!("Wrote {} scores to {:?}", report.scores.len(), foutput);
    Ok(())
}
