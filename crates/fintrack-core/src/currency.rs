//! Currency formatting for advisory text
//!
//! Advisory messages interpolate money as whole Pakistani rupees with
//! thousands grouping, e.g. `Rs 1,550`. Rounding to whole units happens
//! here, before interpolation, so two calls with the same numeric inputs
//! produce byte-identical message text.

/// Format an amount as a whole-rupee display string.
///
/// Rounds to the nearest rupee with ties away from zero (`f64::round`).
pub fn format_pkr(amount: f64) -> String {
    let rupees = amount.round() as i64;
    let sign = if rupees < 0 { "-" } else { "" };
    let digits = rupees.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}Rs {}", sign, grouped)
}
