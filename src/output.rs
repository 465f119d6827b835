//! Report rendering for graded rosters.
//!
//! Supports the plain-text report, pretty JSON, and CSV rows. Every
//! renderer writes to a caller-supplied writer; the binary passes stdout.

use anyhow::Result;
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::Serialize;
use std::io::{self, Write};
use tracing::debug;

use crate::analyzers::aggregate::GradeReport;
use crate::analyzers::types::StudentSummary;

const RULE_WIDTH: usize = 60;
const NAME_WIDTH: usize = 10;

/// Formats a score list like `[40, 55, 7]`, dropping `.0` on whole numbers.
///
/// Zero signs, exponents and non-finite values follow Python's float repr.
pub fn format_scores(scores: &[f64]) -> String {
    let parts: Vec<String> = scores.iter().map(|&s| format_score(s)).collect();
    format!("[{}]", parts.join(", "))
}

fn format_score(score: f64) -> String {
    let magnitude = score.abs();
    if score.is_nan() {
        "nan".to_string()
    } else if score.is_infinite() {
        format!("{}", score)
    } else if score == 0.0 && score.is_sign_negative() {
        "-0.0".to_string()
    } else if magnitude >= 1e16 || (magnitude != 0.0 && magnitude < 1e-4) {
        scientific(score)
    } else if score.fract() == 0.0 {
        format!("{:.0}", score)
    } else {
        format!("{}", score)
    }
}

/// `1e16` -> `1e+16`, `1.5e-5` -> `1.5e-05`.
fn scientific(score: f64) -> String {
    let raw = format!("{:e}", score);
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    match exponent.parse::<i32>() {
        Ok(exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.abs())
        }
        Err(_) => raw,
    }
}

/// Writes the human-readable report.
///
/// Raw grades follow roster order while the averages section is sorted
/// by name.
pub fn write_report<W: Write>(w: &mut W, report: &GradeReport) -> Result<()> {
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(w, "{rule}")?;
    writeln!(w, "STUDENT GRADE REPORT")?;
    writeln!(w, "{rule}")?;

    writeln!(w, "\nRaw Grades:")?;
    for student in report.roster.iter() {
        writeln!(
            w,
            "  - {:<width$}: {}",
            student.name,
            format_scores(&student.scores),
            width = NAME_WIDTH
        )?;
    }

    writeln!(w, "\nAverages & Letters:")?;
    for (name, avg, letter) in report.alphabetical() {
        writeln!(
            w,
            "  - {:<width$}: average={:6.2}  letter={}",
            name,
            avg,
            letter,
            width = NAME_WIDTH
        )?;
    }

    writeln!(w, "\nTop Performer:")?;
    writeln!(
        w,
        "  - {} with an average of {:.2}",
        report.top.name, report.top.average
    )?;

    writeln!(w, "\nClass Statistics:")?;
    writeln!(
        w,
        "  - Overall class average: {:.2}",
        report.class.class_average
    )?;
    writeln!(
        w,
        "  - Students passed (C or better): {} / {}",
        report.class.num_passed, report.class.total_students
    )?;
    writeln!(w, "{rule}")?;

    Ok(())
}

/// Prints the human-readable report to stdout.
pub fn print_report(report: &GradeReport) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle, report)?;
    handle.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    report: &'a GradeReport,
    students: Vec<StudentSummary>,
}

/// Writes the report as pretty-printed JSON, stamped with the generation time.
pub fn write_json<W: Write>(w: &mut W, report: &GradeReport) -> Result<()> {
    let doc = JsonReport {
        generated_at: Utc::now(),
        report,
        students: report.summaries(),
    };
    serde_json::to_writer_pretty(&mut *w, &doc)?;
    writeln!(w)?;
    Ok(())
}

/// Writes one CSV row per student in roster order, with a header line.
pub fn write_csv<W: Write>(w: &mut W, report: &GradeReport) -> Result<()> {
    let summaries = report.summaries();
    debug!(rows = summaries.len(), "Writing CSV report");

    let mut writer = WriterBuilder::new().has_headers(true).from_writer(w);
    for summary in &summaries {
        writer.serialize(summary)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::aggregate::analyze;
    use crate::analyzers::grade::GradeScale;
    use crate::roster::Roster;

    fn render(report: &GradeReport) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, report).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_format_scores() {
        assert_eq!(format_scores(&[40.0, 55.0, 7.0]), "[40, 55, 7]");
        assert_eq!(format_scores(&[92.5, 88.0]), "[92.5, 88]");
        assert_eq!(format_scores(&[]), "[]");
    }

    #[test]
    fn test_format_scores_edge_values() {
        assert_eq!(format_scores(&[-0.0, 0.0, -3.0]), "[-0.0, 0, -3]");
        assert_eq!(format_scores(&[1e16, 2.5e17]), "[1e+16, 2.5e+17]");
        assert_eq!(format_scores(&[0.0001, 0.00001]), "[0.0001, 1e-05]");
        assert_eq!(
            format_scores(&[f64::NAN, f64::INFINITY, f64::NEG_INFINITY]),
            "[nan, inf, -inf]"
        );
    }

    #[test]
    fn test_report_canonical_sections() {
        let report = analyze(&Roster::canonical(), &GradeScale::canonical());
        let text = render(&report);

        assert!(text.starts_with(&"=".repeat(60)));
        assert!(text.contains("STUDENT GRADE REPORT"));
        assert!(text.contains("  - Alice     : [40, 55, 7]"));
        assert!(text.contains("  - Bob       : average= 91.67  letter=A"));
        assert!(text.contains("  - Charlie   : average= 79.00  letter=C"));
        assert!(text.contains("  - Bob with an average of 91.67"));
        assert!(text.contains("  - Overall class average: 68.22"));
        assert!(text.contains("  - Students passed (C or better): 2 / 3"));
    }

    #[test]
    fn test_report_orders_sections_differently() {
        let roster = Roster::new()
            .with_student("Zed", vec![95.0])
            .with_student("Amy", vec![50.0]);
        let text = render(&analyze(&roster, &GradeScale::canonical()));

        let (raw, averages) = text.split_once("Averages & Letters:").unwrap();
        assert!(raw.find("Zed").unwrap() < raw.find("Amy").unwrap());
        assert!(averages.find("Amy").unwrap() < averages.find("Zed").unwrap());
    }

    #[test]
    fn test_report_empty_roster() {
        let text = render(&analyze(&Roster::new(), &GradeScale::canonical()));

        assert!(text.contains("  -  with an average of 0.00"));
        assert!(text.contains("  - Overall class average: 0.00"));
        assert!(text.contains("  - Students passed (C or better): 0 / 0"));
    }

    #[test]
    fn test_long_names_are_not_truncated() {
        let roster = Roster::new().with_student("Bartholomew", vec![70.0]);
        let text = render(&analyze(&roster, &GradeScale::canonical()));

        assert!(text.contains("  - Bartholomew: [70]"));
    }

    #[test]
    fn test_write_json_fields() {
        let report = analyze(&Roster::canonical(), &GradeScale::canonical());
        let mut buf = Vec::new();
        write_json(&mut buf, &report).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert!(value.get("generated_at").is_some());
        assert_eq!(value["top"]["name"], "Bob");
        assert_eq!(value["class"]["num_passed"], 2);
        assert_eq!(value["letters"]["Alice"], "F");
        assert_eq!(value["students"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_write_csv_rows() {
        let report = analyze(&Roster::canonical(), &GradeScale::canonical());
        let mut buf = Vec::new();
        write_csv(&mut buf, &report).unwrap();

        let content = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "name,num_scores,average,letter");
        assert!(lines[1].starts_with("Alice,3,34"));
        assert!(lines[1].ends_with(",F"));
    }
}
