//formats a value as currency: "$" symbol, thousands separators, 2 decimals
//negative values keep the sign after the symbol, e.g. $-1,234.50
pub fn format_currency(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (whole, cents) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("${sign}{grouped}.{cents}")
}
