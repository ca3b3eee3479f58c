use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

/// Parsed form of the persisted `decay_start` column.
#[derive(Debug, Clone, PartialEq)]
pub enum DecayMarker {
    /// No marker: the word is supported and does not decay.
    Stable,
    /// Decaying since the given instant.
    Decaying(DateTime<Utc>),
    /// A marker is present but could not be parsed. Carries the raw text.
    Malformed(String),
}

impl DecayMarker {
    /// Decode a stored column value. NULL and blank both mean stable.
    pub fn parse(stored: Option<&str>) -> Self {
        match stored.map(str::trim) {
            None | Some("") => DecayMarker::Stable,
            Some(raw) => match parse_timestamp(raw) {
                Some(ts) => DecayMarker::Decaying(ts),
                None => DecayMarker::Malformed(raw.to_string()),
            },
        }
    }

    pub fn start(&self) -> Option<DateTime<Utc>> {
        match self {
            DecayMarker::Decaying(ts) => Some(*ts),
            _ => None,
        }
    }

    /// True for any present marker, parseable or not.
    pub fn is_present(&self) -> bool {
        !matches!(self, DecayMarker::Stable)
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, DecayMarker::Malformed(_))
    }
}

/// Canonical on-disk timestamp: RFC 3339, UTC, microsecond precision.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse RFC 3339, or the legacy `YYYY-MM-DD HH:MM:SS[.ffffff]` form (read as UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}
