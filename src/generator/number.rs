//! Number formatting matching the existing database files.
//!
//! Floats are written in their shortest round-trip form, always with a
//! decimal point in fixed notation and a signed two-digit exponent
//! otherwise (`2.0`, `0.0001`, `1e-05`, `1.5e+16`).

/// Shortest round-trip text of a float in the database's layout.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    // Shortest digits and decimal exponent, e.g. "-1.5e-5"
    let sci = format!("{:e}", value);
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return sci;
    };

    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(m) => ("-", m),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if (-4..16).contains(&exponent) {
        let body = if exponent >= 0 {
            let int_len = exponent as usize + 1;
            if digits.len() <= int_len {
                format!("{}{}.0", digits, "0".repeat(int_len - digits.len()))
            } else {
                format!("{}.{}", &digits[..int_len], &digits[int_len..])
            }
        } else {
            format!("0.{}{}", "0".repeat((-exponent - 1) as usize), digits)
        };
        format!("{sign}{body}")
    } else {
        let (first, rest) = digits.split_at(1);
        let mantissa = if rest.is_empty() {
            first.to_string()
        } else {
            format!("{first}.{rest}")
        };
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        format!("{sign}{mantissa}e{exp_sign}{:02}", exponent.abs())
    }
}

/// Scientific notation with a fixed number of decimals and a signed,
/// two-digit exponent: `1.9103E-07`.
pub fn format_scientific(value: f64, precision: usize) -> String {
    let sci = format!("{:.*E}", precision, value);
    let Some((mantissa, exponent)) = sci.split_once('E') else {
        return sci;
    };
    match exponent.parse::<i32>() {
        Ok(e) => {
            let exp_sign = if e < 0 { '-' } else { '+' };
            format!("{mantissa}E{exp_sign}{:02}", e.abs())
        }
        Err(_) => sci,
    }
}

/// Round to a number of decimal places through the decimal text form.
pub fn round_decimals(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value)
        .parse()
        .unwrap_or(value)
}
