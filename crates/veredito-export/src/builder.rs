use signal_core::{RawSignal, Side, VereditoItem};
use signal_normalizer::{normalize_price, num_field, pt_to_iso, to_symbol_usdt};

use crate::entry::resolve_entry;

/// Maps one selected raw signal into the canonical export record. Prices go
/// through magnitude-tiered rounding; datetimes are reordered to ISO or
/// emptied; an unresolvable entry stays `NaN` rather than dropping the item.
pub fn build_item(signal: &RawSignal, side: Side) -> VereditoItem {
    VereditoItem {
        symbol: to_symbol_usdt(signal),
        side,
        entry: normalize_price(resolve_entry(signal)),
        target: normalize_price(num_field(&signal.target)),
        stop_loss: normalize_price(num_field(&signal.stop_loss)),
        entrada_datahora: signal
            .entry_datetime
            .as_deref()
            .map(pt_to_iso)
            .unwrap_or_default(),
        saida_datahora: signal
            .exit_datetime
            .as_deref()
            .map(pt_to_iso)
            .unwrap_or_default(),
    }
}
