//! PVP price parsing.

/// Returns true if `integer` is digits grouped in threes by `separator`,
/// with a leading group of one to three digits (`"1.234.567"`).
fn is_grouped(integer: &str, separator: char) -> bool {
    let is_digits = |group: &str| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit());
    let unsigned = integer.strip_prefix('-').unwrap_or(integer);
    let mut groups = unsigned.split(separator);
    let lead_ok = groups
        .next()
        .is_some_and(|lead| is_digits(lead) && lead.len() <= 3);
    lead_ok && groups.all(|group| group.len() == 3 && is_digits(group))
}

/// Rewrites `text` with a `.` decimal point and no thousands separators.
///
/// When both `,` and `.` occur, the one that appears last is the decimal
/// mark. A mark occurring once on its own is a decimal mark; one occurring
/// several times is a thousands separator.
fn canonical_number(text: &str) -> Option<String> {
    let count = |mark: char| text.matches(mark).count();
    let (decimal, thousands) = match (text.rfind(','), text.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => (Some(','), Some('.')),
        (Some(_), Some(_)) => (Some('.'), Some(',')),
        (Some(_), None) if count(',') == 1 => (Some(','), None),
        (Some(_), None) => (None, Some(',')),
        (None, Some(_)) if count('.') == 1 => (Some('.'), None),
        (None, Some(_)) => (None, Some('.')),
        (None, None) => (None, None),
    };

    let (integer, fraction) = match decimal {
        Some(mark) => {
            let (integer, fraction) = text.rsplit_once(mark)?;
            (integer, Some(fraction))
        }
        None => (text, None),
    };
    let integer = match thousands {
        Some(separator) if !is_grouped(integer, separator) => return None,
        Some(separator) => integer.replace(separator, ""),
        None => integer.to_string(),
    };

    Some(match fraction {
        Some(fraction) => format!("{integer}.{fraction}"),
        None => integer,
    })
}

/// Parses a PVP cell.
///
/// Accepts surrounding whitespace and a leading `$` or `€`. Both
/// `"1.234,50"` and `"1,234.50"` read as 1234.5: the last of `,` and `.`
/// is the decimal mark and the other must group digits in threes. A lone
/// mark is always decimal, so `"12,50"` is 12.5 and `"1.234"` is 1.234.
/// Returns `None` for empty, malformed or non-numeric text and for
/// non-finite values.
///
/// ```
/// use pvp_normalization::parse_price;
///
/// assert_eq!(parse_price(" 12.5 "), Some(12.5));
/// assert_eq!(parse_price("12,50"), Some(12.5));
/// assert_eq!(parse_price("$ 1,234.50"), Some(1234.5));
/// assert_eq!(parse_price("€ 1.234,50"), Some(1234.5));
/// assert_eq!(parse_price("n/d"), None);
/// ```
pub fn parse_price(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let unsigned = trimmed
        .strip_prefix('$')
        .or_else(|| trimmed.strip_prefix('€'))
        .unwrap_or(trimmed)
        .trim();
    if unsigned.is_empty() {
        return None;
    }

    canonical_number(unsigned)?
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}
