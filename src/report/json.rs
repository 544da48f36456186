use crate::grading::format::{format_coefficient, format_mark};
use crate::grading::mark::{Mark, Validity};
use crate::grading::Computation;
use crate::theme::Theme;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    theme: Theme,
    modules: Vec<JsonModule<'a>>,
    overall: JsonOverall,
    invalid_fields: Vec<JsonField<'a>>,
}

#[derive(Serialize)]
struct JsonModule<'a> {
    name: &'a str,
    coefficient: f64,
    result: Option<Mark>,
    display: String,
}

#[derive(Serialize)]
struct JsonOverall {
    average: Option<Mark>,
    display: String,
    total_coefficient: f64,
    total_display: String,
}

#[derive(Serialize)]
struct JsonField<'a> {
    id: &'a str,
    validity: Validity,
    rewrite: Option<&'a str>,
}

pub fn to_json(computation: &Computation, theme: Theme) -> Result<String, serde_json::Error> {
    let report = JsonReport {
        theme,
        modules: computation
            .modules
            .iter()
            .map(|module| JsonModule {
                name: &module.name,
                coefficient: module.coefficient,
                result: module.result,
                display: format_mark(module.result),
            })
            .collect(),
        overall: JsonOverall {
            average: computation.overall.average,
            display: format_mark(computation.overall.average),
            total_coefficient: computation.overall.total_coefficient,
            total_display: format_coefficient(computation.overall.total_coefficient),
        },
        invalid_fields: computation
            .invalid_fields()
            .map(|field| JsonField {
                id: &field.id,
                validity: field.validity,
                rewrite: field.rewrite.as_deref(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&report)
}
