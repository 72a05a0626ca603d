//! Lenient field decoding.
//!
//! Records are edited by hand in form inputs, so the store ends up holding
//! page numbers as numbers, numeric strings or `""`, and text fields as
//! `null`. These helpers fold all of that into the typed model.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCount {
    Unsigned(u64),
    Float(f64),
    Text(String),
}

impl RawCount {
    fn into_count(self) -> Option<u32> {
        match self {
            Self::Unsigned(n) => Some(n.min(u64::from(u32::MAX)) as u32),
            Self::Float(f) if f.is_finite() => Some(f.clamp(0.0, f64::from(u32::MAX)) as u32),
            Self::Float(_) => None,
            Self::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return None;
                }
                s.parse::<f64>()
                    .ok()
                    .and_then(|f| Self::Float(f).into_count())
            }
        }
    }
}

/// `null`, `""` and unparseable text become `None`.
pub(crate) fn optional_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawCount>::deserialize(deserializer)?;
    Ok(raw.and_then(RawCount::into_count))
}

/// Like [`optional_count`] but missing values read as zero.
pub(crate) fn count_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    optional_count(deserializer).map(Option::unwrap_or_default)
}

pub(crate) fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn list_or_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
