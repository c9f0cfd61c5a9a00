use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analysis::{AnalysisReport, analyze_file};
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use ansi_term::Style;
use std::path::Path;

/// Handle the `analyze` command
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Analyze { files, json } = cmd {
        let today = chrono::Local::now().date_naive();

        let mut reports = Vec::with_capacity(files.len());
        for f in files {
            reports.push(analyze_file(Path::new(f), today)?);
        }

        if *json {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        } else {
            for r in &reports {
                print_report(r);
            }
        }
    }
    Ok(())
}

fn print_report(r: &AnalysisReport) {
    let s = &r.statistics;
    let verdict = Style::new().bold().fg(r.anomaly_type.colour());

    header(format!("📄 {}", r.file));
    println!("Total tests   : {}", s.total_tests);
    println!("Passed        : {}", s.passed_tests);
    println!("Failed        : {}", s.failed_tests);
    println!("Skipped       : {}", s.skipped_tests);
    println!("Average BAC   : {:.3}", s.average_bac);
    println!("Max BAC       : {:.2}", s.max_bac);
    println!("Tampering     : {}", s.tampering_attempts);
    println!("Bypass        : {}", s.bypass_attempts);
    if let (Some(start), Some(end)) = (s.period_start, s.period_end) {
        println!("Period        : {start} → {end}");
    }
    println!("Anomaly       : {}", verdict.paint(r.anomaly_type.as_str()));

    if r.anomaly_type.is_flagged() {
        warning(&r.anomaly_details);
    }
    println!();
}
