/// Tip calculation
///
/// The calculator takes a bill amount and a tip percentage and produces
/// the tip formatted in the host locale's currency. Raw user text is
/// parsed leniently: anything that is not a number counts as zero.

use super::currency::CurrencyFormatter;

/// Tip percentage used when a caller does not supply one
pub const DEFAULT_TIP_PERCENT: f64 = 15.0;

/// Raw input from the tip calculator screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TipRequest {
    /// Bill amount exactly as typed
    pub amount_text: String,
    /// Tip percentage exactly as typed
    pub tip_percent_text: String,
    /// Round the tip up to the next whole unit
    pub round_up: bool,
}

impl TipRequest {
    /// Parsed bill amount (0.0 if the text is not a number)
    pub fn amount(&self) -> f64 {
        parse_decimal(&self.amount_text)
    }

    /// Parsed tip percentage (0.0 if the text is not a number)
    pub fn tip_percent(&self) -> f64 {
        parse_decimal(&self.tip_percent_text)
    }

    /// Compute and format the tip for the current input
    pub fn formatted_tip(&self, currency: &CurrencyFormatter) -> String {
        calculate_tip(self.amount(), Some(self.tip_percent()), self.round_up, currency)
    }
}

/// Parse user text as a decimal number, falling back to 0.0
///
/// Surrounding whitespace is ignored. NaN and infinities count as
/// unparseable.
pub fn parse_decimal(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Compute the raw tip value
///
/// No validation is done; negative and zero inputs go straight through
/// the arithmetic. With `round_up` the result is the ceiling of the tip.
pub fn tip_amount(amount: f64, tip_percent: f64, round_up: bool) -> f64 {
    let tip = tip_percent / 100.0 * amount;

    if round_up {
        tip.ceil()
    } else {
        tip
    }
}

/// Calculate the tip and format it as a currency string (e.g. "$10.00")
///
/// `None` for `tip_percent` means [`DEFAULT_TIP_PERCENT`].
pub fn calculate_tip(
    amount: f64,
    tip_percent: Option<f64>,
    round_up: bool,
    currency: &CurrencyFormatter,
) -> String {
    let tip_percent = tip_percent.unwrap_or(DEFAULT_TIP_PERCENT);
    let tip = tip_amount(amount, tip_percent, round_up);
    tracing::trace!(amount, tip_percent, round_up, tip, "tip computed");
    currency.format(tip)
}
