use crate::grading::format::{format_coefficient, format_mark};
use crate::grading::mark::Validity;
use crate::grading::Computation;
use crate::theme::Theme;

pub fn to_markdown(computation: &Computation, theme: Theme) -> String {
    let mut output = String::new();
    output.push_str("# Grade Report\n\n");
    output.push_str(&format!("Theme: {theme}\n\n"));

    output.push_str("## Modules\n\n");
    for module in &computation.modules {
        output.push_str(&format!(
            "- {} (coef {}): {}\n",
            module.name,
            format_coefficient(module.coefficient),
            format_mark(module.result)
        ));
    }
    output.push('\n');

    output.push_str("## Invalid Entries\n\n");
    let mut any_invalid = false;
    for field in computation.invalid_fields() {
        any_invalid = true;
        let note = match (field.validity, field.rewrite.as_deref()) {
            (Validity::Corrected, Some(rewrite)) => format!("corrected to {rewrite}"),
            _ => "ignored (not a mark between 0 and 20)".to_string(),
        };
        output.push_str(&format!("- ! {}: {}\n", field.id, note));
    }
    if !any_invalid {
        output.push_str("- none\n");
    }
    output.push('\n');

    output.push_str("## Overall\n\n");
    output.push_str(&format!(
        "overall average: {}\ntotal coefficient: {}\n",
        format_mark(computation.overall.average),
        format_coefficient(computation.overall.total_coefficient)
    ));

    output
}

/// One-line summary used after each edit in an interactive session.
pub fn summary_line(computation: &Computation) -> String {
    let modules = computation
        .modules
        .iter()
        .map(|module| format!("{}={}", module.name, format_mark(module.result)))
        .collect::<Vec<_>>()
        .join(" ");
    let flagged = computation
        .invalid_fields()
        .map(|field| format!(" !{}", field.id))
        .collect::<String>();
    format!(
        "{modules} | overall={} coef={}{flagged}",
        format_mark(computation.overall.average),
        format_coefficient(computation.overall.total_coefficient)
    )
}
