use super::mark::Mark;
use super::roster::WeightSpec;
use std::collections::BTreeMap;

pub type SubMarks = BTreeMap<String, Option<Mark>>;

/// Weighted sum of the sub-marks named in `weights`. Any missing one makes
/// the whole module absent; sub-marks outside `weights` are ignored.
pub fn aggregate(sub_marks: &SubMarks, weights: &WeightSpec) -> Option<Mark> {
    let mut sum = 0.0;
    for (name, weight) in weights.iter() {
        let mark = sub_marks.get(name).copied().flatten()?;
        sum += mark.value() * weight;
    }
    Some(Mark::clamped(sum))
}
