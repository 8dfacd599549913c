//! Display formatting for prices and distances (es-AR conventions).

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Price rounded to whole pesos with `.` thousands separators: `$ 12.500.000`.
pub fn format_price(amount: f64) -> String {
    if amount <= 0.0 {
        return "Consultar".to_owned();
    }
    format!("$ {}", group_thousands(amount))
}

/// Distance with `.` thousands separators: `45.000 km`.
pub fn format_km(km: f64) -> String {
    format!("{} km", group_thousands(km.max(0.0)))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn group_thousands(value: f64) -> String {
    let whole = value.round() as u64;
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
