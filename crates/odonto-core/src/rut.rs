//! Chilean RUT (Rol Único Tributario) helpers.
//!
//! A RUT is a numeric body followed by a modulus-11 check digit, which is
//! `0`–`9` or `k`. Patients are identified by it on printed records.

/// Strip the dots and hyphen used in the printed form.
pub fn clean(rut: &str) -> String {
    rut.chars()
        .filter(|c| !matches!(c, '.' | '-') && !c.is_whitespace())
        .collect()
}

/// Format a RUT as `12.345.678-5`. Input may already be formatted.
pub fn format(rut: &str) -> String {
    let cleaned = clean(rut);
    let Some((body, dv)) = split(&cleaned) else {
        return cleaned;
    };

    let digits: Vec<char> = body.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }

    format!("{grouped}-{dv}")
}

/// Compute the check digit for a numeric body.
pub fn check_digit(body: &str) -> Option<char> {
    if body.is_empty() {
        return None;
    }

    // Reduced on every step so arbitrarily long bodies cannot overflow.
    let mut sum: u32 = 0;
    let mut multiplier = 2;
    for c in body.chars().rev() {
        sum = (sum + c.to_digit(10)? * multiplier) % 11;
        multiplier = if multiplier == 7 { 2 } else { multiplier + 1 };
    }

    match sum {
        0 => Some('0'),
        1 => Some('k'),
        r => char::from_digit(11 - r, 10),
    }
}

/// Validate the check digit of a RUT, formatted or not.
pub fn validate(rut: &str) -> bool {
    let cleaned = clean(rut);
    let Some((body, dv)) = split(&cleaned) else {
        return false;
    };
    match check_digit(body) {
        Some(expected) => dv.eq_ignore_ascii_case(&expected),
        None => false,
    }
}

fn split(cleaned: &str) -> Option<(&str, char)> {
    if cleaned.chars().count() < 2 {
        return None;
    }
    let dv = cleaned.chars().last()?;
    let body = &cleaned[..cleaned.len() - dv.len_utf8()];
    Some((body, dv.to_ascii_lowercase()))
}
