use rust_decimal::{Decimal, RoundingStrategy};

/// Round to cents, halves away from zero.
pub(crate) fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Render an amount with exactly two decimal places and no currency symbol.
pub(crate) fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", round_cents(amount))
}
