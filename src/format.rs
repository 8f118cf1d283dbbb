/// Formats a star count for display: `999` stays `"999"`, `12345` becomes `"12.3k"`.
///
/// Thousands are rounded to one decimal from the binary `f64` quotient, nearest
/// first and upward on an exact tie, so `1150` is `"1.1k"` and `1250` is `"1.3k"`.
pub fn format_count(count: u64) -> String {
    if count >= 1000 {
        format!("{}k", to_one_decimal(count as f64 / 1000.0))
    } else {
        count.to_string()
    }
}

fn to_one_decimal(value: f64) -> String {
    // Only quarter multiples can sit exactly halfway between two tenths.
    let tenths = value * 10.0;
    if (value * 4.0).fract() == 0.0 && tenths.fract() == 0.5 {
        format!("{:.1}", tenths.ceil() / 10.0)
    } else {
        format!("{:.1}", value)
    }
}
