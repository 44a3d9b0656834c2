//! Row-scanning reader for the summary-statistics export.
//!
//! The statistics export is a loosely structured spreadsheet dumped to CSV.
//! Question blocks are located by scanning for marker rows:
//!
//! ```text
//! Summary for AE6(SQ001) [Lectures]        <- code + subquestion
//! How did these experiences affect you?    <- top question text
//! Answer,Count,Percentage                  <- header row
//! Strongly negative (A1),2,6.06%           <- possible answers...
//! Negative (A2),5,15.15%
//! ...
//! ,,                                       <- blank third cell ends the block
//! ```
//!
//! Everything recovered here lands in a [`QuestionCatalog`]; the analysis
//! never touches the export format itself.

use std::{fs::File, io::Read, path::Path};

use anyhow::Context;
use likert_survey::{QuestionCatalog, QuestionInfo};

pub(crate) fn load_catalog<P>(path: P) -> anyhow::Result<QuestionCatalog>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    parse_catalog(file).with_context(|| format!("failed to parse {}", path.display()))
}

fn parse_catalog<R>(input: R) -> anyhow::Result<QuestionCatalog>
where
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    let rows: Vec<Vec<String>> = reader
        .records()
        .map(|record| record.map(|r| r.iter().map(str::to_owned).collect()))
        .collect::<Result<_, _>>()?;

    let mut catalog = QuestionCatalog::default();
    for (index, row) in rows.iter().enumerate() {
        let Some(summary) = row.first() else {
            continue;
        };
        let Some(code) = summary_code(summary) else {
            continue;
        };
        let top_question = rows
            .get(index + 1)
            .and_then(|row| row.first())
            .cloned()
            .unwrap_or_default();
        catalog.insert(
            code,
            QuestionInfo {
                summary: summary.clone(),
                top_question,
                subquestion: subquestion_label(summary),
                possible_answers: possible_answers(&rows, index),
            },
        );
    }
    Ok(catalog)
}

/// Extracts the question code from a `Summary for ...` marker row, `None`
/// for any other row.
fn summary_code(cell: &str) -> Option<String> {
    let mut tokens = cell.split_whitespace();
    if tokens.next() != Some("Summary") {
        return None;
    }
    let code = tokens.nth(1)?;
    // Subquestion codes carry a parenthesized suffix: keep up to the first ')'.
    match code.find(')') {
        Some(end) => Some(code[..=end].to_owned()),
        None => Some(code.to_owned()),
    }
}

/// The bracketed subquestion label of a summary row, empty if absent.
fn subquestion_label(summary: &str) -> String {
    let Some(start) = summary.find('[') else {
        return String::new();
    };
    summary[start + 1..]
        .trim_end()
        .trim_end_matches(']')
        .to_owned()
}

/// Possible answers follow two rows below the marker, until the first row
/// without a third cell.
fn possible_answers(rows: &[Vec<String>], marker: usize) -> Vec<String> {
    let mut answers = Vec::new();
    let mut index = marker + 3;
    while let Some(row) = rows.get(index) {
        if row.get(2).is_none_or(|cell| cell.trim().is_empty()) {
            break;
        }
        if let Some(answer) = row.first() {
            answers.push(answer_label(answer));
        }
        index += 1;
    }
    answers
}

/// Strips the parenthesized answer-code suffix: `"Negative (A2)"` -> `"Negative"`.
fn answer_label(answer: &str) -> String {
    match answer.find('(') {
        Some(start) => answer[..start].trim_end().to_owned(),
        None => answer.trim_end().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = "\
Survey statistics,,
,,
Summary for AE6(SQ001) [Lectures],,
How did these experiences affect you?,,
Answer,Count,Percentage
Strongly negative (A1),2,6.06%
Negative (A2),5,15.15%
Neutral (A3),10,30.30%
Positive (A4),12,36.36%
Strongly positive (A5),4,12.12%
,,
Summary for MH2,,
Where do you place yourself on the continuum?,,
Answer,Count,Percentage
In crisis (A1),1,3.03%
Struggling (A2),8,24.24%
Surviving (A3),12,36.36%
Thriving (A4),9,27.27%
Excelling (A5),3,9.09%
,,
";

    #[test]
    fn test_parse_locates_all_codes() {
        let catalog = parse_catalog(EXPORT.as_bytes()).unwrap();
        assert_eq!(
            catalog.codes().collect::<Vec<_>>(),
            vec!["AE6(SQ001)", "MH2"]
        );
    }

    #[test]
    fn test_parse_subquestion_and_top_question() {
        let catalog = parse_catalog(EXPORT.as_bytes()).unwrap();
        assert_eq!(catalog.subquestion("AE6(SQ001)"), Some("Lectures"));
        assert_eq!(
            catalog.top_question("AE6(SQ001)"),
            Some("How did these experiences affect you?")
        );
        // Single-part question: no bracketed label.
        assert_eq!(catalog.subquestion("MH2"), Some(""));
    }

    #[test]
    fn test_parse_possible_answers_strips_codes() {
        let catalog = parse_catalog(EXPORT.as_bytes()).unwrap();
        assert_eq!(
            catalog.possible_answers("MH2").unwrap(),
            &[
                "In crisis".to_owned(),
                "Struggling".to_owned(),
                "Surviving".to_owned(),
                "Thriving".to_owned(),
                "Excelling".to_owned(),
            ]
        );
    }

    #[test]
    fn test_summary_code_variants() {
        assert_eq!(summary_code("Summary for MH2"), Some("MH2".to_owned()));
        assert_eq!(
            summary_code("Summary for AE6(SQ001) [Lectures]"),
            Some("AE6(SQ001)".to_owned())
        );
        assert_eq!(summary_code("Field summary"), None);
        assert_eq!(summary_code(""), None);
    }
}
