//! Entry-band parsing for free-text ranges like "1.23 - 1.30".

use std::sync::LazyLock;

use regex::Regex;

static RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\d.\-eE]+)\s*-\s*([\d.\-eE]+)").unwrap());

/// A parsed `<number> - <number>` entry band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntryRange {
    pub min: f64,
    pub max: f64,
    pub mid: f64,
}

/// Parses a free-text entry band. En and em dashes count as separators, and
/// leading minus signs plus scientific notation are permitted. Returns
/// `None` unless two finite numbers are found.
pub fn parse_entry_range(text: &str) -> Option<EntryRange> {
    let norm = text.replace(['\u{2013}', '\u{2014}'], "-");
    let caps = RANGE_RE.captures(&norm)?;
    let a: f64 = caps[1].parse().ok()?;
    let b: f64 = caps[2].parse().ok()?;
    if !a.is_finite() || !b.is_finite() {
        return None;
    }
    Some(EntryRange {
        min: a.min(b),
        max: a.max(b),
        mid: (a + b) / 2.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_hyphen_range() {
        let r = parse_entry_range("1.10-1.20").unwrap();
        assert_eq!(r.min, 1.10);
        assert_eq!(r.max, 1.20);
        assert_eq!(r.mid, 1.15);
    }

    #[test]
    fn en_and_em_dashes_are_separators() {
        let en = parse_entry_range("1.10 \u{2013} 1.20").unwrap();
        let em = parse_entry_range("1.10\u{2014}1.20").unwrap();
        assert_eq!(en.mid, 1.15);
        assert_eq!(em.mid, 1.15);
    }

    #[test]
    fn reversed_bounds_are_sorted() {
        let r = parse_entry_range("1.20 - 1.10").unwrap();
        assert_eq!(r.min, 1.10);
        assert_eq!(r.max, 1.20);
        assert_eq!(r.mid, 1.15);
    }

    #[test]
    fn scientific_notation_bounds() {
        let r = parse_entry_range("1e-5 - 3e-5").unwrap();
        assert_eq!(r.min, 1e-5);
        assert_eq!(r.max, 3e-5);
        assert_eq!(r.mid, 2e-5);
    }

    #[test]
    fn surrounding_prose_is_ignored() {
        let r = parse_entry_range("Entrada sugerida: 148.50 - 151.00 USDT").unwrap();
        assert_eq!(r.min, 148.50);
        assert_eq!(r.max, 151.00);
    }

    #[test]
    fn no_numbers_yields_none() {
        assert!(parse_entry_range("no numbers here").is_none());
        assert!(parse_entry_range("").is_none());
        assert!(parse_entry_range("150.00").is_none());
    }
}
