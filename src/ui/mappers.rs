//! Helpers mapping domain values to display strings.

/// Format an amount with `id-ID` digit grouping: dots between thousands,
/// comma before any fractional part. `5000000` renders as `5.000.000`.
pub fn format_rupiah(amount: f64) -> String {
    let negative = amount < 0.0;
    let abs = amount.abs();

    let plain = if abs.fract() == 0.0 && abs < 1e15 {
        format!("{}", abs as i64)
    } else {
        format!("{}", abs)
    };

    let (int_part, frac_part) = match plain.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (plain.as_str(), None),
    };

    let mut grouped = String::new();
    let digits = int_part.len();
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (digits - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupiah_groups_thousands_with_dots() {
        assert_eq!(format_rupiah(0.0), "0");
        assert_eq!(format_rupiah(500.0), "500");
        assert_eq!(format_rupiah(5000.0), "5.000");
        assert_eq!(format_rupiah(15000.0), "15.000");
        assert_eq!(format_rupiah(4985000.0), "4.985.000");
        assert_eq!(format_rupiah(5000000.0), "5.000.000");
    }

    #[test]
    fn test_format_rupiah_negative() {
        assert_eq!(format_rupiah(-340000.0), "-340.000");
    }

    #[test]
    fn test_format_rupiah_fraction_uses_comma() {
        assert_eq!(format_rupiah(12500.5), "12.500,5");
    }
}
