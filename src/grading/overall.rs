use super::mark::Mark;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModuleScore {
    pub result: Option<Mark>,
    pub coefficient: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverallResult {
    pub average: Option<Mark>,
    pub total_coefficient: f64,
}

/// Coefficient-weighted mean over the modules that have a result. The
/// divisor is the sum of the coefficients actually used, so a mean of
/// in-range results is itself in range and is not clamped again.
pub fn aggregate<'a, I>(modules: I) -> OverallResult
where
    I: IntoIterator<Item = &'a ModuleScore>,
{
    let mut weighted_sum = 0.0;
    let mut total_coefficient = 0.0;

    for module in modules {
        if let Some(result) = module.result {
            weighted_sum += result.value() * module.coefficient;
            total_coefficient += module.coefficient;
        }
    }

    let average = if total_coefficient > 0.0 {
        Some(Mark::from_mean(weighted_sum / total_coefficient))
    } else {
        None
    };

    OverallResult {
        average,
        total_coefficient,
    }
}
