use super::mark::Mark;

pub const PLACEHOLDER: &str = "-";

pub fn format_mark(mark: Option<Mark>) -> String {
    match mark {
        Some(mark) => format!("{:.2}", mark.value()),
        None => PLACEHOLDER.to_string(),
    }
}

pub fn format_coefficient(total: f64) -> String {
    if total <= 0.0 {
        PLACEHOLDER.to_string()
    } else if total.fract() == 0.0 {
        format!("{total:.0}")
    } else {
        format!("{total}")
    }
}
