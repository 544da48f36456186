//! The fixed module table: which sub-marks each module reads, how they are
//! weighted and how much the module counts in the overall average.

#[derive(Debug, Clone, PartialEq)]
pub struct WeightSpec {
    entries: Vec<(String, f64)>,
}

impl WeightSpec {
    pub fn new(entries: &[(&str, f64)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(name, weight)| ((*name).to_string(), weight.max(0.0)))
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .map(|(name, weight)| (name.as_str(), *weight))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModuleSpec {
    pub name: String,
    pub weights: WeightSpec,
    pub coefficient: f64,
}

impl ModuleSpec {
    /// Coefficients are floored at zero like weights, so a module can drop
    /// out of the overall average but never subtract from it.
    pub fn new(name: &str, weights: WeightSpec, coefficient: f64) -> Self {
        Self {
            name: name.to_string(),
            weights,
            coefficient: coefficient.max(0.0),
        }
    }

    pub fn field_ids(&self) -> impl Iterator<Item = String> + '_ {
        self.weights
            .iter()
            .map(move |(sub_mark, _)| field_id(&self.name, sub_mark))
    }
}

/// Input fields are identified as `<module>-<submark>`.
pub fn field_id(module: &str, sub_mark: &str) -> String {
    format!("{module}-{sub_mark}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    modules: Vec<ModuleSpec>,
}

impl Roster {
    pub fn new(modules: Vec<ModuleSpec>) -> Self {
        Self { modules }
    }

    pub fn modules(&self) -> &[ModuleSpec] {
        &self.modules
    }

    /// Only weighted sub-marks are fields; anything else is never read.
    pub fn has_field(&self, id: &str) -> bool {
        self.modules
            .iter()
            .flat_map(ModuleSpec::field_ids)
            .any(|field| field == id)
    }
}

impl Default for Roster {
    fn default() -> Self {
        let exam_and_tutorial = || WeightSpec::new(&[("controle", 0.6), ("td", 0.4)]);
        let exam_and_practical = WeightSpec::new(&[("controle", 0.6), ("tp", 0.4)]);

        Self::new(vec![
            ModuleSpec::new("tql", exam_and_tutorial(), 2.0),
            ModuleSpec::new("gpl", exam_and_tutorial(), 2.0),
            ModuleSpec::new("dac", exam_and_tutorial(), 2.0),
            ModuleSpec::new("daw", exam_and_practical, 1.0),
            ModuleSpec::new("gl2", exam_and_tutorial(), 4.0),
            ModuleSpec::new("tabd", exam_and_tutorial(), 2.0),
        ])
    }
}
