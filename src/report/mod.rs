pub mod json;
pub mod md;

use crate::error::GradeError;
use crate::grading::Computation;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(
    computation: &Computation,
    theme: Theme,
    format: OutputFormat,
) -> Result<String, GradeError> {
    match format {
        OutputFormat::Json => json::to_json(computation, theme).map_err(GradeError::Json),
        OutputFormat::Md => Ok(md::to_markdown(computation, theme)),
    }
}
