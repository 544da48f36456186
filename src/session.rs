use crate::error::{GradeError, Result};
use crate::grading::roster::Roster;
use crate::grading::{compute_all, Computation, RawInputs};

/// The editable side of the calculator: raw inputs as the user left them and
/// the computation derived from them. Recomputed in full after every change.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    roster: Roster,
    inputs: RawInputs,
    computation: Computation,
}

impl Session {
    pub fn new(roster: Roster) -> Self {
        let inputs = RawInputs::new();
        let computation = compute_all(&inputs, &roster);
        Self {
            roster,
            inputs,
            computation,
        }
    }

    pub fn with_inputs(roster: Roster, mut inputs: RawInputs) -> Self {
        inputs.retain_known(&roster);
        if inputs.is_empty() {
            return Self::new(roster);
        }
        let mut session = Self::new(roster);
        session.inputs = inputs;
        session.recompute();
        session
    }

    pub fn inputs(&self) -> &RawInputs {
        &self.inputs
    }

    pub fn computation(&self) -> &Computation {
        &self.computation
    }

    pub fn apply_edit(&mut self, id: &str, raw: &str) -> Result<()> {
        self.apply_edits(&[(id.to_string(), raw.to_string())])
    }

    /// All field ids are checked before anything changes.
    pub fn apply_edits(&mut self, edits: &[(String, String)]) -> Result<()> {
        if let Some((id, _)) = edits.iter().find(|(id, _)| !self.roster.has_field(id)) {
            return Err(GradeError::UnknownField(id.clone()));
        }
        for (id, raw) in edits {
            tracing::debug!(field = %id, raw = %raw, "edit");
            self.inputs.set(id, raw);
        }
        self.recompute();
        Ok(())
    }

    pub fn reset(&mut self) {
        tracing::info!("reset all inputs");
        self.inputs = RawInputs::new();
        self.recompute();
    }

    /// Over-scale entries are rewritten to the maximum in the stored text.
    /// The flags of this computation still show the correction; the next
    /// recomputation sees the rewritten text as valid.
    fn recompute(&mut self) {
        self.computation = compute_all(&self.inputs, &self.roster);
        for field in &self.computation.fields {
            if let Some(rewrite) = &field.rewrite {
                tracing::info!(field = %field.id, value = %rewrite, "corrected out-of-range mark");
                self.inputs.set(&field.id, rewrite);
            }
        }
    }
}

pub fn parse_assignment(text: &str) -> Result<(String, String)> {
    match text.split_once('=') {
        Some((id, raw)) if !id.trim().is_empty() => {
            Ok((id.trim().to_string(), raw.trim().to_string()))
        }
        _ => Err(GradeError::MalformedAssignment(text.to_string())),
    }
}
