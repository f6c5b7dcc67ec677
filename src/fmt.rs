//! Shared formatting utilities for energy figures and console output

use console::Emoji;
use std::fmt::{self, Display};

/// Heading emoji that prints its plain-text fallback when `NO_EMOJI` is set
#[derive(Clone, Copy)]
pub struct Glyph(Emoji<'static, 'static>);

impl Glyph {
    const fn new(emoji: &'static str, fallback: &'static str) -> Self {
        Self(Emoji(emoji, fallback))
    }
}

impl Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if emoji_disabled() {
            f.write_str(self.0 .1)
        } else {
            Display::fmt(&self.0, f)
        }
    }
}

fn emoji_disabled() -> bool {
    std::env::var_os("NO_EMOJI").is_some()
}

/// House emoji for household headings
pub const HOUSE: Glyph = Glyph::new("🏠", "#");

/// Lightning emoji for energy figures
pub const BOLT: Glyph = Glyph::new("⚡", "*");

/// Globe emoji for emissions
pub const GLOBE: Glyph = Glyph::new("🌍", "~");

/// Money emoji for bill figures
pub const MONEY: Glyph = Glyph::new("💰", "$");

/// Light bulb emoji for suggestions
pub const BULB: Glyph = Glyph::new("💡", "!");

/// Seedling emoji for the impact score
pub const SEEDLING: Glyph = Glyph::new("🌱", ">");

/// Checkmark emoji for success
pub const CHECKMARK: Glyph = Glyph::new("✅", "[OK]");

/// Info emoji for informational messages
pub const INFO: Glyph = Glyph::new("ℹ️", "i");

/// Chart emoji for metrics/statistics
pub const CHART: Glyph = Glyph::new("📊", "~");

/// Warning emoji for caution/alerts
pub const WARNING: Glyph = Glyph::new("⚠️", "!");

/// Currency symbol used for bill amounts
pub const CURRENCY: &str = "₹";

/// Icon carried in report data, or nothing when `NO_EMOJI` is set
pub fn icon(glyph: &str) -> &str {
    if emoji_disabled() {
        ""
    } else {
        glyph
    }
}

/// Format monthly energy
///
/// # Examples
///
/// ```
/// use home_carbon::fmt::format_kwh;
///
/// assert_eq!(format_kwh(234.0), "234.00 kWh");
/// assert_eq!(format_kwh(0.5), "0.50 kWh");
/// ```
pub fn format_kwh(kwh: f64) -> String {
    format!("{:.2} kWh", kwh)
}

/// Format a mass of CO2
pub fn format_kg(kg: f64) -> String {
    format!("{:.2} kg", kg)
}

/// Format a bill amount
///
/// # Examples
///
/// ```
/// use home_carbon::fmt::format_currency;
///
/// assert_eq!(format_currency(282.0), "₹282.00");
/// assert_eq!(format_currency(1234.5), "₹1,234.50");
/// ```
pub fn format_currency(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (whole, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{}{}.{}", sign, CURRENCY, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_kwh_and_kg() {
        assert_eq!(format_kwh(180.0), "180.00 kWh");
        assert_eq!(format_kg(191.88), "191.88 kg");
        assert_eq!(format_kg(0.0), "0.00 kg");
    }

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(30.0), "₹30.00");
        assert_eq!(format_currency(999.99), "₹999.99");
        assert_eq!(format_currency(1080.0), "₹1,080.00");
        assert_eq!(format_currency(1_234_567.8), "₹1,234,567.80");
        assert_eq!(format_currency(-54.0), "-₹54.00");
    }
}
