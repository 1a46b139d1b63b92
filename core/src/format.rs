//! Display strings derived from listing fields.

/// Shown instead of a price when the listing has none.
pub const CONTACT_SELLER: &str = "Contact seller for price";

/// Shown instead of a location when the listing has none.
pub const DEFAULT_LOCATION: &str = "Australia";

/// Reformat the digits of `raw` as whole Australian dollars, e.g.
/// `"$53,081"` and `"53081"` both become `"$53,081"`.
///
/// Returns `None` when `raw` holds no digits or too many to fit a `u64`.
pub fn currency_string(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let amount: u64 = digits.parse().ok()?;
    Some(format!("${}", group_thousands(amount)))
}

/// Price display: formatted currency, the raw string if it cannot be
/// formatted, or [`CONTACT_SELLER`] when absent.
pub fn price_display(price: Option<&str>) -> String {
    match price {
        Some(raw) => currency_string(raw).unwrap_or_else(|| raw.to_string()),
        None => CONTACT_SELLER.to_string(),
    }
}

pub fn location_display(location: Option<&str>) -> String {
    location.unwrap_or(DEFAULT_LOCATION).to_string()
}

fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
