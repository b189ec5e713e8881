use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use signal_core::{HorizonKey, PresentDayAnalysis, Side, SignalError, VereditoItem};
use tracing::info;

use crate::builder::build_item;
use crate::selector::HorizonSelector;

/// Export of every non-NEUTRO signal regardless of horizon, BUY side first
pub fn build_veredito_array(analysis: Option<&PresentDayAnalysis>) -> Vec<VereditoItem> {
    let mut out = Vec::new();
    if let Some(pd) = analysis {
        out.extend(
            pd.present_day_buy_signals
                .iter()
                .filter(|s| !s.is_neutro())
                .map(|s| build_item(s, Side::Buy)),
        );
        out.extend(
            pd.present_day_sell_signals
                .iter()
                .filter(|s| !s.is_neutro())
                .map(|s| build_item(s, Side::Sell)),
        );
    }
    out
}

/// Export restricted to one horizon: up to four BUY then up to four SELL
/// items, picked by the selector. A missing snapshot means empty pools, not
/// an error.
pub fn build_veredito_array_by_horizon(
    analysis: Option<&PresentDayAnalysis>,
    horizon: HorizonKey,
) -> Vec<VereditoItem> {
    let (buys, sells) = match analysis {
        Some(pd) => (
            pd.present_day_buy_signals.as_slice(),
            pd.present_day_sell_signals.as_slice(),
        ),
        None => (&[][..], &[][..]),
    };

    let selector = HorizonSelector::new();
    let label = horizon.label();
    let min_roi = horizon.min_roi();
    let picked_buys = selector.pick_side(buys, Side::Buy, label, min_roi);
    let picked_sells = selector.pick_side(sells, Side::Sell, label, min_roi);

    let mut out = Vec::with_capacity(picked_buys.signals.len() + picked_sells.signals.len());
    out.extend(picked_buys.signals.iter().map(|s| build_item(s, Side::Buy)));
    out.extend(picked_sells.signals.iter().map(|s| build_item(s, Side::Sell)));
    out
}

/// A named, download-ready export payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VereditoExport {
    pub filename: String,
    pub payload: Vec<VereditoItem>,
}

impl VereditoExport {
    /// Pretty-printed JSON of the payload, the part written to disk
    pub fn to_json(&self) -> Result<String, SignalError> {
        Ok(serde_json::to_string_pretty(&self.payload)?)
    }
}

/// Builds the per-horizon export with a wall-clock stamped filename
pub fn export_veredito_json_by_horizon(
    analysis: Option<&PresentDayAnalysis>,
    horizon: HorizonKey,
) -> VereditoExport {
    let payload = build_veredito_array_by_horizon(analysis, horizon);
    let filename = export_filename(horizon, Utc::now());
    info!(%filename, items = payload.len(), "Veredito export ready");
    VereditoExport { filename, payload }
}

/// `lucra_veredito_<timestamp>_<key>.json`, where the timestamp is the
/// ISO-8601 wall clock truncated to seconds with `:` and `T` flattened
/// to `-`.
pub fn export_filename(horizon: HorizonKey, now: DateTime<Utc>) -> String {
    let ts = now.format("%Y-%m-%d-%H-%M-%S");
    format!("lucra_veredito_{ts}_{horizon}.json")
}
