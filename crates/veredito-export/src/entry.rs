use signal_core::RawSignal;
use signal_normalizer::{num_field, parse_entry_range};

/// Derives the entry price for a signal that may not state one directly.
///
/// Priority: midpoint of the entry range, else the target/stop midpoint
/// when both are finite, else the live price. A signal carrying none of
/// these yields `NaN`, which downstream code emits as-is.
pub fn resolve_entry(signal: &RawSignal) -> f64 {
    if let Some(range) = signal.entry_range.as_deref().and_then(parse_entry_range) {
        return range.mid;
    }
    let target = num_field(&signal.target);
    let stop = num_field(&signal.stop_loss);
    if target.is_finite() && stop.is_finite() {
        return (target + stop) / 2.0;
    }
    let live = num_field(&signal.live_price);
    if live.is_finite() {
        live
    } else {
        f64::NAN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entry_range_midpoint_wins() {
        let signal = RawSignal {
            entry_range: Some("148.50 - 151.50".to_string()),
            target: Some(json!("160")),
            stop_loss: Some(json!("140")),
            live_price: Some(json!(149.0)),
            ..Default::default()
        };
        assert_eq!(resolve_entry(&signal), 150.0);
    }

    #[test]
    fn target_stop_midpoint_when_no_range() {
        let signal = RawSignal {
            target: Some(json!("160")),
            stop_loss: Some(json!(140)),
            live_price: Some(json!(149.0)),
            ..Default::default()
        };
        assert_eq!(resolve_entry(&signal), 150.0);
    }

    #[test]
    fn unparseable_range_falls_through() {
        let signal = RawSignal {
            entry_range: Some("a definir".to_string()),
            target: Some(json!(12.0)),
            stop_loss: Some(json!(8.0)),
            ..Default::default()
        };
        assert_eq!(resolve_entry(&signal), 10.0);
    }

    #[test]
    fn live_price_is_the_last_resort() {
        let signal = RawSignal {
            target: Some(json!("160")),
            live_price: Some(json!("149.25")),
            ..Default::default()
        };
        assert_eq!(resolve_entry(&signal), 149.25);
    }

    #[test]
    fn nothing_usable_yields_nan() {
        assert!(resolve_entry(&RawSignal::default()).is_nan());

        let signal = RawSignal {
            entry_range: Some("sem faixa".to_string()),
            target: Some(json!("TBD")),
            live_price: Some(json!(null)),
            ..Default::default()
        };
        assert!(resolve_entry(&signal).is_nan());
    }
}
