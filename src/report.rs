/// Fixed heading that identifies this tool's comment among all comments on a
/// pull request. Changing it orphans previously posted comments.
pub const REPORT_MARKER: &str = "## Black Formatting Report";

/// Render the comment body. Pure: same inputs, same report.
///
/// `paths` is substituted into the remediation command exactly as configured,
/// not split.
pub fn render_report(output: &str, exit_code: i32, black_version: &str, paths: &str) -> String {
    let verdict = if exit_code == 0 {
        "✅ All files are properly formatted!".to_string()
    } else {
        format!(
            "⚠️ Some files need formatting. Please run:\n\
             ```bash\n\
             pip install black=={}\n\
             black {}\n\
             ```",
            black_version, paths
        )
    };

    format!("{}\n```\n{}\n```\n\n{}", REPORT_MARKER, output, verdict)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_run_has_success_line_only() {
        let report = render_report("All done!", 0, "24.1.0", "app/");

        assert!(report.starts_with(REPORT_MARKER));
        assert!(report.contains("✅ All files are properly formatted!"));
        assert!(!report.contains("pip install"));
        assert!(!report.contains("⚠️"));
    }

    #[test]
    fn test_dirty_run_has_remediation_block() {
        let report = render_report("would reformat app/main.py", 1, "24.1.0", "app/");

        assert!(report.contains("⚠️ Some files need formatting"));
        assert!(report.contains("pip install black==24.1.0"));
        assert!(report.contains("black app/"));
        assert!(!report.contains("✅"));
    }

    #[test]
    fn test_output_is_embedded_verbatim_in_fence() {
        let output = "would reformat a.py\nwould reformat b.py";
        let report = render_report(output, 1, "24.1.0", "src/");

        assert!(report.contains(&format!("```\n{}\n```", output)));
    }

    #[test]
    fn test_paths_are_substituted_unsplit() {
        let report = render_report("", 2, "23.9.1", "src/ tests/ scripts/");

        assert!(report.contains("black src/ tests/ scripts/"));
    }

    #[test]
    fn test_any_nonzero_exit_is_a_failure() {
        for code in [1, 2, 123] {
            let report = render_report("boom", code, "24.1.0", ".");
            assert!(report.contains("⚠️"), "exit code {} should warn", code);
        }
    }
}
