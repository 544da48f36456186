pub mod format;
pub mod mark;
pub mod module;
pub mod overall;
pub mod roster;

use mark::{Mark, Validity};
use overall::{ModuleScore, OverallResult};
use roster::{field_id, Roster};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw text per input field, keyed `<module>-<submark>`. A field that was
/// never entered reads as blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawInputs(BTreeMap<String, String>);

impl RawInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> &str {
        self.0.get(id).map_or("", String::as_str)
    }

    /// Blank values are dropped so that clearing a field and never
    /// touching it leave the same state behind.
    pub fn set(&mut self, id: &str, raw: &str) {
        if raw.trim().is_empty() {
            self.0.remove(id);
        } else {
            self.0.insert(id.to_string(), raw.to_string());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(id, raw)| (id.as_str(), raw.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn retain_known(&mut self, roster: &Roster) {
        self.0.retain(|id, _| roster.has_field(id));
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldCheck {
    pub id: String,
    pub validity: Validity,
    pub rewrite: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleOutcome {
    pub name: String,
    pub coefficient: f64,
    pub result: Option<Mark>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Computation {
    pub modules: Vec<ModuleOutcome>,
    pub overall: OverallResult,
    pub fields: Vec<FieldCheck>,
}

impl Computation {
    pub fn invalid_fields(&self) -> impl Iterator<Item = &FieldCheck> {
        self.fields.iter().filter(|field| !field.validity.is_valid())
    }

    pub fn has_invalid(&self) -> bool {
        self.invalid_fields().next().is_some()
    }
}

/// Recomputes every module and the overall average from a snapshot of the
/// raw inputs. Pure: the same inputs always give the same computation.
pub fn compute_all(inputs: &RawInputs, roster: &Roster) -> Computation {
    let mut fields = Vec::new();
    let mut modules = Vec::with_capacity(roster.modules().len());

    for spec in roster.modules() {
        let mut sub_marks = module::SubMarks::new();
        for (sub_mark, _) in spec.weights.iter() {
            let id = field_id(&spec.name, sub_mark);
            let normalized = mark::normalize(inputs.get(&id));
            fields.push(FieldCheck {
                rewrite: normalized.rewrite(),
                validity: normalized.validity,
                id,
            });
            sub_marks.insert(sub_mark.to_string(), normalized.mark);
        }

        modules.push(ModuleOutcome {
            name: spec.name.clone(),
            coefficient: spec.coefficient,
            result: module::aggregate(&sub_marks, &spec.weights),
        });
    }

    let scores = modules
        .iter()
        .map(|outcome| ModuleScore {
            result: outcome.result,
            coefficient: outcome.coefficient,
        })
        .collect::<Vec<_>>();
    let overall = overall::aggregate(&scores);

    tracing::debug!(
        computed = modules.iter().filter(|outcome| outcome.result.is_some()).count(),
        total_coefficient = overall.total_coefficient,
        "recomputed grades"
    );

    Computation {
        modules,
        overall,
        fields,
    }
}
