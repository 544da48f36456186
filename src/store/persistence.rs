use super::{KeyValueStore, INPUTS_KEY, THEME_KEY};
use crate::error::{GradeError, Result};
use crate::grading::roster::Roster;
use crate::grading::RawInputs;
use crate::theme::Theme;
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct InputSnapshot {
    saved_at: String,
    inputs: RawInputs,
}

/// Fail-silent front for a [`KeyValueStore`]. Storage problems are logged
/// and never reach the caller, and a disabled store behaves like an empty
/// one that forgets everything.
pub struct Persistence {
    store: Option<Box<dyn KeyValueStore>>,
}

impl Persistence {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store: Some(store) }
    }

    pub fn disabled() -> Self {
        Self { store: None }
    }

    pub fn restore_inputs(&self, roster: &Roster) -> RawInputs {
        let Some(store) = self.store.as_deref() else {
            return RawInputs::new();
        };
        match read_snapshot(store) {
            Ok(Some(snapshot)) => {
                let mut inputs = snapshot.inputs;
                inputs.retain_known(roster);
                tracing::debug!(
                    saved_at = %snapshot.saved_at,
                    fields = inputs.iter().count(),
                    "restored inputs"
                );
                inputs
            }
            Ok(None) => RawInputs::new(),
            Err(error) => {
                tracing::warn!(%error, "could not restore saved inputs");
                RawInputs::new()
            }
        }
    }

    pub fn save_inputs(&mut self, inputs: &RawInputs) {
        let Some(store) = self.store.as_deref_mut() else {
            return;
        };
        let snapshot = InputSnapshot {
            saved_at: Utc::now().to_rfc3339(),
            inputs: inputs.clone(),
        };
        let outcome = serde_json::to_string(&snapshot)
            .map_err(GradeError::from)
            .and_then(|payload| store.set(INPUTS_KEY, &payload));
        match outcome {
            Ok(()) => tracing::debug!("saved inputs"),
            Err(error) => tracing::warn!(%error, "could not save inputs"),
        }
    }

    pub fn clear_inputs(&mut self) {
        if let Some(store) = self.store.as_deref_mut() {
            if let Err(error) = store.remove(INPUTS_KEY) {
                tracing::warn!(%error, "could not clear saved inputs");
            }
        }
    }

    pub fn load_theme(&self) -> Theme {
        let Some(store) = self.store.as_deref() else {
            return Theme::default();
        };
        match store.get(THEME_KEY) {
            Ok(Some(value)) => Theme::parse_stored(&value),
            Ok(None) => Theme::default(),
            Err(error) => {
                tracing::warn!(%error, "could not read theme preference");
                Theme::default()
            }
        }
    }

    pub fn save_theme(&mut self, theme: Theme) {
        if let Some(store) = self.store.as_deref_mut() {
            if let Err(error) = store.set(THEME_KEY, theme.as_str()) {
                tracing::warn!(%error, "could not save theme preference");
            }
        }
    }
}

fn read_snapshot(store: &dyn KeyValueStore) -> Result<Option<InputSnapshot>> {
    match store.get(INPUTS_KEY)? {
        Some(payload) => Ok(Some(serde_json::from_str(&payload)?)),
        None => Ok(None),
    }
}
