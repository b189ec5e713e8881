use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Direction label the model attaches to a signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalType {
    #[serde(rename = "COMPRA")]
    Compra,
    #[serde(rename = "VENDA")]
    Venda,
    #[serde(rename = "NEUTRO")]
    Neutro,
    /// Anything else the model invents; kept so one bad label never fails a batch
    #[serde(other)]
    Unknown,
}

/// Trade direction, processed independently by the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "SELL")]
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }
}

/// One AI-generated trading recommendation.
///
/// Every field is optional and untrusted: the model may omit, retype, or
/// garble any of them. Numeric-looking fields arrive as either numbers or
/// strings, so they are kept as raw JSON values and coerced downstream
/// through total normalizer functions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSignal {
    pub signal_type: Option<SignalType>,
    pub asset_name: Option<String>,
    pub ticker: Option<String>,
    /// Free-text entry band, e.g. "1.23 - 1.30"
    pub entry_range: Option<String>,
    pub target: Option<Value>,
    pub stop_loss: Option<Value>,
    pub live_price: Option<Value>,
    /// Display label such as "24 Horas"; must echo the horizon exactly
    pub horizon: Option<String>,
    pub final_confidence_score: Option<Value>,
    /// Usually a string like "74%"
    pub probability: Option<Value>,
    /// "DD/MM/YYYY HH:mm:ss" as authored by the model
    pub entry_datetime: Option<String>,
    pub exit_datetime: Option<String>,
}

impl RawSignal {
    /// NEUTRO signals are never exported
    pub fn is_neutro(&self) -> bool {
        self.signal_type == Some(SignalType::Neutro)
    }
}

/// Snapshot of the most recent present-day analysis produced by the AI layer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PresentDayAnalysis {
    pub present_day_buy_signals: Vec<RawSignal>,
    pub present_day_sell_signals: Vec<RawSignal>,
}

/// Canonical export record consumed downstream. Field names are part of the
/// file format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VereditoItem {
    pub symbol: String,
    pub side: Side,
    pub entry: f64,
    pub target: f64,
    pub stop_loss: f64,
    pub entrada_datahora: String,
    pub saida_datahora: String,
}
