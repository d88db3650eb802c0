use anyhow::{Result, bail};

/// Parses one observation cell.
///
/// Blank cells are `Ok(None)`. Accepts `12.5%` (divided by 100), comma
/// decimals (`0,125`), and thousand separators (`1.234`, `1,234`, `1'234`,
/// `1’234`, `1 234`). Anything else is an error and the caller treats the
/// cell as missing.
pub fn parse_cell(raw: &str) -> Result<Option<f64>> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Ok(None);
    }

    let (body, pct) = match compact.strip_suffix('%') {
        Some(rest) => (rest, true),
        None => (compact.as_str(), false),
    };
    if body.is_empty() {
        bail!("unparseable value '{}'", raw.trim());
    }

    let normalized = normalize_separators(body);
    let value: f64 = match normalized.parse() {
        Ok(v) => v,
        Err(_) => bail!("unparseable value '{}'", raw.trim()),
    };
    if !value.is_finite() {
        bail!("non-finite value '{}'", raw.trim());
    }
    Ok(Some(if pct { value / 100.0 } else { value }))
}

fn normalize_separators(s: &str) -> String {
    let s: String = s.chars().filter(|&c| c != '\'' && c != '’').collect();
    let dots = s.matches('.').count();
    let commas = s.matches(',').count();

    match (dots, commas) {
        (0, 0) => s,
        (_, 0) => single_kind(&s, '.'),
        (0, _) => single_kind(&s, ','),
        _ => {
            // Both present: whichever comes last is the decimal mark.
            let last_dot = s.rfind('.').unwrap_or(0);
            let last_comma = s.rfind(',').unwrap_or(0);
            let (thousands, decimal) = if last_dot > last_comma {
                (',', '.')
            } else {
                ('.', ',')
            };
            s.chars()
                .filter(|&c| c != thousands)
                .map(|c| if c == decimal { '.' } else { c })
                .collect()
        }
    }
}

fn single_kind(s: &str, sep: char) -> String {
    if is_thousands_grouped(s, sep) {
        s.chars().filter(|&c| c != sep).collect()
    } else if sep == ',' {
        s.replace(',', ".")
    } else {
        s.to_string()
    }
}

/// `1.234`, `-12,500`, `1.234.567`: one to three leading digits (not a
/// lone zero), then groups of exactly three digits.
fn is_thousands_grouped(s: &str, sep: char) -> bool {
    let mut parts = s.split(sep);
    let head = parts.next().unwrap_or_default();
    let head = head.strip_prefix(['-', '+']).unwrap_or(head);
    let digits = |p: &str| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit());
    if !digits(head) || head.len() > 3 || head.chars().all(|c| c == '0') {
        return false;
    }
    let mut groups = 0;
    for part in parts {
        if !digits(part) || part.len() != 3 {
            return false;
        }
        groups += 1;
    }
    groups > 0
}
