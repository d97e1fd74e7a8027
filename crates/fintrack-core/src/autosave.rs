//! Auto-save policy
//!
//! Every recorded expense is rounded up to the next multiple of
//! [`ROUND_UP_UNIT`] and the difference is moved into the savings pocket.
//! Income is handled by a separate rule that skims a fixed share of the
//! amount. The two rules key off disjoint transaction kinds, so a single
//! transaction can never receive both contributions.
//!
//! Both functions are pure: the caller credits the savings pocket with the
//! returned contribution.

use crate::models::TransactionKind;

/// Expenses are rounded up to the next multiple of this unit (rupees).
pub const ROUND_UP_UNIT: f64 = 500.0;

/// Share of an income amount skimmed into the savings pocket.
pub const INCOME_SKIM_RATE: f64 = 0.20;

/// Remainders below this are treated as an exact multiple of the unit.
/// Guards against binary-float artifacts making `n * 500.0` look like it
/// has a tiny positive remainder.
const REMAINDER_EPSILON: f64 = 1e-9;

/// Round-up contribution for an expense amount.
///
/// Returns `ceil(amount / unit) * unit - amount`, which is always in
/// `[0, ROUND_UP_UNIT)`. Exact multiples of the unit contribute `0`, not a
/// full unit.
pub fn round_up_contribution(amount: f64) -> f64 {
    let remainder = amount.rem_euclid(ROUND_UP_UNIT);
    if remainder < REMAINDER_EPSILON || ROUND_UP_UNIT - remainder < REMAINDER_EPSILON {
        0.0
    } else {
        ROUND_UP_UNIT - remainder
    }
}

/// Auto-save contribution for a validated transaction.
pub fn contribution_for(kind: TransactionKind, amount: f64) -> f64 {
    match kind {
        TransactionKind::Expense => round_up_contribution(amount),
        TransactionKind::Income => amount * INCOME_SKIM_RATE,
    }
}
