use std::iter::FromIterator;

use crate::count::FreqTable;

pub type RankedEntry = (String, u64);

/// Orders a frequency table by descending count. Ties are broken by
/// ascending word, so the output is identical for every run, worker
/// count, and input partitioning.
pub fn rank(frequency: FreqTable) -> Vec<RankedEntry> {
    let mut ranked = Vec::from_iter(frequency);
    ranked.sort_unstable_by(|(w_a, c_a), (w_b, c_b)| c_b.cmp(c_a).then_with(|| w_a.cmp(w_b)));
    ranked
}
