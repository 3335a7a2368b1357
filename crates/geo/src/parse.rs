//! Free-text coordinate parsing.
//!
//! Accepts decimal degrees (`23.7`, `-23.7`, `23.7N`) and
//! degrees-minutes-seconds (`23 30 0 N`, `23°30′0″N`) for a single axis,
//! and comma- or whitespace-separated latitude/longitude pairs.

use crate::{Coordinate, GeoError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Decimal form: optional sign, digits, optional fraction, optional
/// trailing hemisphere letter. Nothing else may follow.
static DECIMAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([+-]?\d+(?:\.\d+)?)\s*([NSEWnsew])?$").unwrap());

/// Hemisphere letter suffix for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Hemisphere::North),
            'S' => Some(Hemisphere::South),
            'E' => Some(Hemisphere::East),
            'W' => Some(Hemisphere::West),
            _ => None,
        }
    }

    /// Applies the hemisphere sign. The letter always wins over any
    /// numeric sign already present in `value`.
    fn apply(self, value: f64) -> f64 {
        match self {
            Hemisphere::North | Hemisphere::East => value.abs(),
            Hemisphere::South | Hemisphere::West => -value.abs(),
        }
    }
}

/// Parses one coordinate axis from free text.
///
/// Range is not checked here; pair parsing and [`Coordinate::new`] validate
/// latitude/longitude bounds.
///
/// # Errors
/// [`GeoError::EmptyInput`] for blank input, [`GeoError::InvalidFormat`]
/// when neither the decimal nor the DMS form matches.
///
/// # Example
/// ```
/// use basinview_geo::parse_coordinate;
///
/// assert_eq!(parse_coordinate("23.7N").unwrap(), 23.7);
/// assert_eq!(parse_coordinate("23 30 0 S").unwrap(), -23.5);
/// ```
pub fn parse_coordinate(text: &str) -> Result<f64> {
    let raw = text.trim();
    if raw.is_empty() {
        return Err(GeoError::EmptyInput);
    }

    if let Some(caps) = DECIMAL_RE.captures(raw) {
        // The capture group is all digits, so the parse cannot fail.
        let value: f64 = caps[1]
            .parse()
            .map_err(|_| GeoError::InvalidFormat(raw.to_string()))?;
        let signed = match caps.get(2).and_then(|m| Hemisphere::from_char(m.as_str().chars().next()?)) {
            Some(hemisphere) => hemisphere.apply(value),
            None => value,
        };
        return Ok(signed);
    }

    parse_dms(raw)
}

/// Parses the degrees-minutes-seconds form.
fn parse_dms(raw: &str) -> Result<f64> {
    let normalized = normalize_separators(raw);
    let tokens: Vec<&str> = normalized.split_whitespace().collect();

    let hemisphere = extract_hemisphere(&tokens);

    // Hemisphere letters may be glued to a numeric token ("0N"); strip
    // them everywhere before parsing the numbers.
    let numbers: Vec<String> = tokens
        .iter()
        .map(|token| {
            token
                .chars()
                .filter(|c| Hemisphere::from_char(*c).is_none())
                .collect::<String>()
        })
        .filter(|stripped| !stripped.is_empty())
        .collect();

    if numbers.is_empty() {
        return Err(GeoError::InvalidFormat(raw.to_string()));
    }

    let mut parts = [0.0f64; 3];
    for (i, number) in numbers.iter().enumerate() {
        let value: f64 = number
            .parse()
            .map_err(|_| GeoError::InvalidFormat(raw.to_string()))?;
        if i < 3 {
            parts[i] = value;
        }
    }
    let [degrees, minutes, seconds] = parts;

    let mut value = degrees.abs() + minutes.abs() / 60.0 + seconds.abs() / 3600.0;
    if degrees < 0.0 {
        value = -value;
    }

    Ok(match hemisphere {
        Some(hemisphere) => hemisphere.apply(value),
        None => value,
    })
}

/// Replaces commas and degree/minute/second punctuation with spaces.
fn normalize_separators(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            ',' | '°' | 'º' | '′' | '’' | '\'' | '″' | '”' | '"' => ' ',
            other => other,
        })
        .collect()
}

/// Finds the hemisphere letter: a standalone token wins, otherwise the
/// final character of the input.
fn extract_hemisphere(tokens: &[&str]) -> Option<Hemisphere> {
    let standalone = tokens.iter().find_map(|token| {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Hemisphere::from_char(c),
            _ => None,
        }
    });
    standalone.or_else(|| {
        let last = tokens.last()?.chars().last()?;
        Hemisphere::from_char(last)
    })
}

/// Parses a latitude/longitude pair from free text.
///
/// A comma splits the pair explicitly (first comma only). Without a comma
/// the input is whitespace-tokenized and every split point is tried left to
/// right; the first split where both halves parse and the pair is in range
/// wins. DMS segments consume a variable number of tokens, so this
/// backtracking scan is the only deterministic way to resolve the pair.
///
/// # Errors
/// [`GeoError::OutOfRange`] for a comma-separated pair outside valid
/// bounds, [`GeoError::AmbiguousOrInvalid`] when no token split of a
/// comma-less input succeeds.
///
/// # Example
/// ```
/// use basinview_geo::parse_lat_lon_pair;
///
/// let coord = parse_lat_lon_pair("23.7, 121.0").unwrap();
/// assert_eq!(coord.latitude, 23.7);
/// assert_eq!(coord.longitude, 121.0);
/// ```
pub fn parse_lat_lon_pair(text: &str) -> Result<Coordinate> {
    let raw = text.trim();
    if raw.is_empty() {
        return Err(GeoError::EmptyInput);
    }

    if let Some((lat_text, lon_text)) = raw.split_once(',') {
        let (lat_text, lon_text) = (lat_text.trim(), lon_text.trim());
        if lat_text.is_empty() || lon_text.is_empty() {
            return Err(GeoError::InvalidFormat(raw.to_string()));
        }
        let latitude = parse_coordinate(lat_text)?;
        let longitude = parse_coordinate(lon_text)?;
        return Coordinate::new(latitude, longitude);
    }

    let tokens: Vec<&str> = raw.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err(GeoError::AmbiguousOrInvalid(raw.to_string()));
    }

    for split in 1..tokens.len() {
        let lat_text = tokens[..split].join(" ");
        let lon_text = tokens[split..].join(" ");
        let (Ok(latitude), Ok(longitude)) =
            (parse_coordinate(&lat_text), parse_coordinate(&lon_text))
        else {
            continue;
        };
        if let Ok(coord) = Coordinate::new(latitude, longitude) {
            return Ok(coord);
        }
    }

    Err(GeoError::AmbiguousOrInvalid(raw.to_string()))
}
