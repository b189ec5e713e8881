use std::cmp::Ordering;

use signal_core::{RawSignal, Side, RELAX_STEP, ROI_FLOOR, TARGET_PER_SIDE};
use signal_normalizer::{num_field, percent_field};
use tracing::{debug, info};

use crate::entry::resolve_entry;

/// Implied fractional return of a candidate under the given direction.
/// A non-finite or zero entry, or a non-finite target, yields `-inf` so the
/// candidate can never pass a threshold and always sorts last.
pub fn roi_for_side(signal: &RawSignal, side: Side) -> f64 {
    let entry = resolve_entry(signal);
    let target = num_field(&signal.target);
    if !entry.is_finite() || !target.is_finite() || entry == 0.0 {
        return f64::NEG_INFINITY;
    }
    match side {
        Side::Buy => (target - entry) / entry,
        Side::Sell => (entry - target) / entry,
    }
}

/// Selection knobs. Defaults reproduce the horizon policy constants.
#[derive(Debug, Clone)]
pub struct SelectionPolicy {
    pub target_per_side: usize,
    pub relax_step: f64,
    pub roi_floor: f64,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            target_per_side: TARGET_PER_SIDE,
            relax_step: RELAX_STEP,
            roi_floor: ROI_FLOOR,
        }
    }
}

/// Outcome of one per-side pass, including how far the ROI bar had to drop
#[derive(Debug)]
pub struct SideSelection<'a> {
    pub signals: Vec<&'a RawSignal>,
    /// Effective ROI threshold of the final filtering pass
    pub threshold: f64,
    pub relax_steps: u32,
}

/// Picks up to `target_per_side` signals of one direction for one horizon
#[derive(Debug, Clone, Default)]
pub struct HorizonSelector {
    policy: SelectionPolicy,
}

impl HorizonSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: SelectionPolicy) -> Self {
        Self { policy }
    }

    /// Filters the pool to the requested horizon, orders it by quality, and
    /// relaxes the ROI bar until the target count is met or the floor is hit.
    ///
    /// Every relaxation pass re-filters the same sorted pool, so lowering
    /// the bar only ever adds candidates; the result is always a prefix of
    /// the quality order for the final threshold.
    pub fn pick_side<'a>(
        &self,
        pool: &'a [RawSignal],
        side: Side,
        label: &str,
        min_roi: f64,
    ) -> SideSelection<'a> {
        let mut pool: Vec<&RawSignal> = pool
            .iter()
            .filter(|s| !s.is_neutro())
            .filter(|s| s.horizon.as_deref().map(str::trim) == Some(label))
            .collect();
        debug!(
            side = side.as_str(),
            label,
            pool = pool.len(),
            "Filtered signal pool"
        );

        pool.sort_by(|a, b| {
            cmp_desc(
                num_field(&a.final_confidence_score),
                num_field(&b.final_confidence_score),
            )
            .then_with(|| cmp_desc(percent_field(&a.probability), percent_field(&b.probability)))
            .then_with(|| cmp_desc(roi_for_side(a, side), roi_for_side(b, side)))
        });

        let mut threshold = min_roi;
        let mut relax_steps = 0u32;
        let mut chosen = self.take_qualifying(&pool, side, threshold);
        while chosen.len() < self.policy.target_per_side && threshold > self.policy.roi_floor {
            threshold -= self.policy.relax_step;
            relax_steps += 1;
            chosen = self.take_qualifying(&pool, side, threshold);
        }

        info!(
            side = side.as_str(),
            label,
            chosen = chosen.len(),
            threshold,
            relax_steps,
            "Signal selection complete"
        );

        SideSelection {
            signals: chosen,
            threshold,
            relax_steps,
        }
    }

    fn take_qualifying<'a>(
        &self,
        pool: &[&'a RawSignal],
        side: Side,
        threshold: f64,
    ) -> Vec<&'a RawSignal> {
        pool.iter()
            .copied()
            .filter(|s| roi_for_side(s, side) >= threshold)
            .take(self.policy.target_per_side)
            .collect()
    }
}

/// Descending order with `NaN` treated as the lowest value, so signals with
/// unparseable scores always land at the end.
fn cmp_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
