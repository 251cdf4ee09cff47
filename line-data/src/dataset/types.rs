//! Line dataset DTOs.
//!
//! These types map directly to the operator's JSON export. The export is
//! loosely typed: fields are sometimes missing, sometimes `null`, and line
//! identifiers occasionally arrive as numbers. Everything here is lenient,
//! and unknown fields are ignored.

use serde::{Deserialize, Deserializer};

/// Top-level dataset document.
#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    /// All line records, in export order.
    #[serde(rename = "linije")]
    pub lines: Vec<LineRecord>,
}

/// One transit line as exported.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LineRecord {
    /// Code shown to riders (e.g. "91", "ЕКО1"). May be empty.
    #[serde(rename = "prikazan_kod_linije", default, deserialize_with = "null_as_default")]
    pub display_code: String,

    /// Stable backend identifier of the line.
    #[serde(rename = "kod_linije", default, deserialize_with = "opaque_id")]
    pub internal_id: Option<String>,

    /// Line type (bus, tram, trolleybus, ...).
    #[serde(rename = "tip_linije", default, deserialize_with = "null_as_default")]
    pub line_type: String,

    /// Line category (city, suburban, night, ...).
    #[serde(rename = "kategorija_linije", default, deserialize_with = "null_as_default")]
    pub category: String,

    /// Recorded itineraries, newest first. Only the first is used.
    #[serde(rename = "verzije", default, deserialize_with = "null_as_default")]
    pub route_versions: Vec<RouteVersion>,
}

impl LineRecord {
    /// Returns `(display_code, internal_id)` when both are non-empty.
    ///
    /// Records without both are not published under any code.
    pub fn identity(&self) -> Option<(&str, &str)> {
        let id = self.internal_id.as_deref().filter(|id| !id.is_empty())?;
        if self.display_code.is_empty() {
            return None;
        }
        Some((self.display_code.as_str(), id))
    }

    /// The route version used for street lists.
    pub fn current_version(&self) -> Option<&RouteVersion> {
        self.route_versions.first()
    }
}

/// One recorded itinerary of a line.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteVersion {
    /// Streets travelled in direction A, `" - "`-delimited.
    #[serde(rename = "spisak_ulica_smer_a", default)]
    pub streets_direction_a: Option<String>,

    /// Streets travelled in direction B, `" - "`-delimited.
    #[serde(rename = "spisak_ulica_smer_b", default)]
    pub streets_direction_b: Option<String>,
}

/// Line identifiers are opaque: accept strings and bare numbers alike.
///
/// A numeric zero is the export's placeholder for "no id" and reads as absent.
#[derive(Deserialize)]
#[serde(untagged)]
enum OpaqueId {
    Text(String),
    Number(serde_json::Number),
}

fn opaque_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = Option::<OpaqueId>::deserialize(deserializer)?;
    Ok(id.and_then(|id| match id {
        OpaqueId::Text(s) => Some(s),
        OpaqueId::Number(n) if n.as_f64() == Some(0.0) => None,
        OpaqueId::Number(n) => Some(n.to_string()),
    }))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
