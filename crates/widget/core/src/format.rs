//! Money formatting for bill lines and totals.
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount with two decimal places behind the currency symbol.
///
/// Examples: `5` → `"$5.00"`, `2.345` → `"$2.35"`, `-1` → `"$-1.00"`.
pub fn format_amount(amount: Decimal, currency_symbol: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{currency_symbol}{rounded:.2}")
}

/// Formats one bill line as `"<name> — <amount>"`.
pub fn format_bill_line(name: &str, amount: &str) -> String {
    format!("{name} — {amount}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_two_places() {
        assert_eq!(format_amount(Decimal::from(5), "$"), "$5.00");
        assert_eq!(format_amount(Decimal::new(25, 1), "$"), "$2.50");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_amount(Decimal::new(2345, 3), "$"), "$2.35");
        assert_eq!(format_amount(Decimal::new(1004, 3), "€"), "€1.00");
    }

    #[test]
    fn renders_negative_amounts_as_supplied() {
        assert_eq!(format_amount(Decimal::from(-1), "$"), "$-1.00");
    }

    #[test]
    fn joins_bill_line() {
        assert_eq!(format_bill_line("Soup", "$5.00"), "Soup — $5.00");
    }
}
