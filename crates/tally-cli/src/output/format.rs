const CURRENCY_SYMBOL: &str = "₹";

/// Aggregate display: currency symbol and two decimals.
pub fn currency(amount: f64) -> String {
    format!("{CURRENCY_SYMBOL}{amount:.2}")
}

/// Per-record display: currency symbol and the amount as entered.
pub fn currency_plain(amount: f64) -> String {
    format!("{CURRENCY_SYMBOL}{}", plain_amount(amount))
}

/// Shortest round-trip decimal. Whole numbers keep a trailing `.0`; very
/// large or very small magnitudes switch to exponent form like `1e+16`.
pub fn plain_amount(amount: f64) -> String {
    let magnitude = amount.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return exponent_form(amount);
    }
    if amount.fract() == 0.0 {
        return format!("{amount:.1}");
    }
    format!("{amount}")
}

fn exponent_form(amount: f64) -> String {
    let raw = format!("{amount:e}");
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    let Ok(power) = exponent.parse::<i32>() else {
        return raw;
    };
    let sign = if power < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", power.abs())
}
