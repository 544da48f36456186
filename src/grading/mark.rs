use serde::Serialize;

pub const MIN_MARK: f64 = 0.0;
pub const MAX_MARK: f64 = 20.0;

/// A score on the 0..=20 scale. Construction always clamps, so a `Mark`
/// held anywhere in the program is in range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Mark(f64);

impl Mark {
    pub fn clamped(value: f64) -> Self {
        Self(clamp(value))
    }

    /// Wraps a weighted mean of marks. Such a mean is in range already, so
    /// the clamp only absorbs floating-point rounding at the bounds.
    pub fn from_mean(value: f64) -> Self {
        debug_assert!(
            (MIN_MARK - 1e-9..=MAX_MARK + 1e-9).contains(&value),
            "mean {value} outside the mark scale"
        );
        Self(clamp(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

pub fn clamp(value: f64) -> f64 {
    value.clamp(MIN_MARK, MAX_MARK)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Validity {
    Valid,
    /// Not a number or negative. Counts as absent; the text is left alone.
    Invalid,
    /// Above the scale. Counts as the maximum; the text must be rewritten.
    Corrected,
}

impl Validity {
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedMark {
    pub mark: Option<Mark>,
    pub validity: Validity,
}

impl NormalizedMark {
    /// Replacement text for the raw field, only set for corrected entries.
    pub fn rewrite(&self) -> Option<String> {
        match (self.validity, self.mark) {
            (Validity::Corrected, Some(mark)) => Some(format!("{}", mark.value())),
            _ => None,
        }
    }
}

pub fn normalize(raw: &str) -> NormalizedMark {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return NormalizedMark {
            mark: None,
            validity: Validity::Valid,
        };
    }

    let value = match trimmed.parse::<f64>() {
        Ok(value) if !value.is_nan() => value,
        _ => {
            return NormalizedMark {
                mark: None,
                validity: Validity::Invalid,
            }
        }
    };

    if value < MIN_MARK {
        NormalizedMark {
            mark: None,
            validity: Validity::Invalid,
        }
    } else if value > MAX_MARK {
        NormalizedMark {
            mark: Some(Mark::clamped(value)),
            validity: Validity::Corrected,
        }
    } else {
        NormalizedMark {
            mark: Some(Mark::clamped(value)),
            validity: Validity::Valid,
        }
    }
}
