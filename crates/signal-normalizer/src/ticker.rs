//! Best-effort ticker extraction and exchange-symbol normalization.

use std::sync::LazyLock;

use regex::Regex;
use signal_core::RawSignal;

static PAREN_TICKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([A-Za-z0-9]{2,10})\)").unwrap());

static UPPER_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]{2,10}").unwrap());

/// Pulls a ticker out of a free-text asset label: prefers a parenthesized
/// token ("Dogwifhat (WIF)"), else the first run of 2-10 capital letters.
/// Uppercased; `None` when nothing plausible is present.
pub fn extract_ticker(asset_name: &str) -> Option<String> {
    if let Some(caps) = PAREN_TICKER_RE.captures(asset_name) {
        return Some(caps[1].to_uppercase());
    }
    UPPER_RUN_RE
        .find(asset_name)
        .map(|m| m.as_str().to_string())
}

/// Exchange-style symbol for a signal: explicit ticker field, else a ticker
/// extracted from the asset name, else the literal "ASSET". Always suffixed
/// with "USDT".
pub fn to_symbol_usdt(signal: &RawSignal) -> String {
    let base = signal
        .ticker
        .as_deref()
        .filter(|t| !t.is_empty())
        .map(str::to_uppercase)
        .or_else(|| signal.asset_name.as_deref().and_then(extract_ticker))
        .unwrap_or_else(|| "ASSET".to_string());
    if base.ends_with("USDT") {
        base
    } else {
        format!("{base}USDT")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> RawSignal {
        RawSignal {
            asset_name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn parenthesized_token_wins() {
        assert_eq!(extract_ticker("Dogwifhat (WIF)").as_deref(), Some("WIF"));
        assert_eq!(extract_ticker("Render (rndr)").as_deref(), Some("RNDR"));
    }

    #[test]
    fn uppercase_run_is_the_fallback() {
        assert_eq!(extract_ticker("SOL breakout setup").as_deref(), Some("SOL"));
        // Runs longer than ten letters are clipped
        assert_eq!(
            extract_ticker("AVERYLONGTICKERNAME").as_deref(),
            Some("AVERYLONGT")
        );
    }

    #[test]
    fn unextractable_names_yield_none() {
        assert!(extract_ticker("Bitcoin").is_none());
        assert!(extract_ticker("").is_none());
    }

    #[test]
    fn explicit_ticker_field_is_preferred() {
        let signal = RawSignal {
            ticker: Some("btc".to_string()),
            asset_name: Some("Dogwifhat (WIF)".to_string()),
            ..Default::default()
        };
        assert_eq!(to_symbol_usdt(&signal), "BTCUSDT");
    }

    #[test]
    fn empty_ticker_field_falls_back_to_asset_name() {
        let signal = RawSignal {
            ticker: Some(String::new()),
            asset_name: Some("Dogwifhat (WIF)".to_string()),
            ..Default::default()
        };
        assert_eq!(to_symbol_usdt(&signal), "WIFUSDT");
    }

    #[test]
    fn unresolvable_signal_defaults_to_asset() {
        assert_eq!(to_symbol_usdt(&RawSignal::default()), "ASSETUSDT");
        assert_eq!(to_symbol_usdt(&named("Bitcoin")), "ASSETUSDT");
    }

    #[test]
    fn existing_usdt_suffix_is_not_doubled() {
        let signal = RawSignal {
            ticker: Some("wifusdt".to_string()),
            ..Default::default()
        };
        assert_eq!(to_symbol_usdt(&signal), "WIFUSDT");
    }
}
