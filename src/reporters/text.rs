//! Text (terminal) reporter with colors

use crate::models::IdentificationReport;
use anyhow::Result;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const CYAN: &str = "\x1b[36m";
const YELLOW: &str = "\x1b[33m";

/// Render an identification result as formatted terminal output
pub fn render(report: &IdentificationReport) -> Result<String> {
    let mut out = String::new();

    if report.is_unknown() {
        out.push_str(&format!(
            "{}: {YELLOW}unknown{RESET} {DIM}(no reference profiles matched){RESET}",
            report.input
        ));
        return Ok(out);
    }

    out.push_str(&format!(
        "{}: {BOLD}{CYAN}{}{RESET} ({})",
        report.input, report.name, report.code
    ));

    // Ranked candidates, one per line, when more than the winner was asked for.
    if report.matches.len() > 1 {
        for m in &report.matches {
            out.push_str(&format!(
                "\n  {DIM}{:<4}{RESET} {:<16} {:.4}",
                m.code, m.name, m.score
            ));
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_identification;

    #[test]
    fn test_text_render_names_winner() {
        let rendered = render(&test_identification()).expect("render text");
        assert!(rendered.contains("English"));
        assert!(rendered.contains("(en)"));
        assert!(rendered.contains("sample.txt"));
    }

    #[test]
    fn test_text_render_lists_ranked_matches() {
        let rendered = render(&test_identification()).expect("render text");
        assert!(rendered.contains("Dutch"));
        assert!(rendered.contains("0.44"));
    }

    #[test]
    fn test_text_render_unknown() {
        let mut ident = test_identification();
        ident.code.clear();
        ident.name.clear();
        ident.matches.clear();

        let rendered = render(&ident).expect("render text");
        assert!(rendered.contains("unknown"));
    }
}
