//! Day-offset corrections for Muslim holidays.
//!
//! Tabular and astronomical Hijri dates can differ from the announced,
//! moon-sighted dates by a day or two.  Corrections arrive as remote
//! configuration JSON, one entry per Ethiopian year:
//!
//! ```json
//! [{"offset_ethio_year": 2017, "offset_hirji_year": 1446,
//!   "offset_eid_al_fitr": -1, "offset_update_timestamp": 1743379200}]
//! ```
//!
//! Every key is optional, a `null` value reads as the key's default, and
//! unknown keys are ignored.

use ethio_core::errors::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// One year's correction entry.  Zero offsets mean "no correction".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigHolidayOffset {
    /// Ethiopian year the entry applies to.
    #[serde(rename = "offset_ethio_year", deserialize_with = "null_as_default")]
    pub ethio_year: i32,
    /// Hijri year the Eid and Mawlid corrections apply to.
    #[serde(rename = "offset_hirji_year", deserialize_with = "null_as_default")]
    pub hijri_year: i32,
    /// Gregorian year, informational.
    #[serde(rename = "offset_greg_year", deserialize_with = "null_as_default")]
    pub greg_year: i32,
    /// Days added to Eid al-Fitr.
    #[serde(rename = "offset_eid_al_fitr", deserialize_with = "null_as_default")]
    pub eid_al_fitr: i32,
    /// Days added to Eid al-Adha.
    #[serde(rename = "offset_eid_al_adha", deserialize_with = "null_as_default")]
    pub eid_al_adha: i32,
    /// Days added to Mawlid.
    #[serde(rename = "offset_mawlid", deserialize_with = "null_as_default")]
    pub mawlid: i32,
    /// Days added to the start of Ramadan.
    #[serde(rename = "offset_ramadan_start", deserialize_with = "null_as_default")]
    pub ramadan_start: i32,
    /// When the entry was last confirmed; 0 means never.
    #[serde(rename = "offset_update_timestamp", deserialize_with = "null_as_default")]
    pub update_timestamp: i64,
    /// Free-form note.
    #[serde(rename = "offset_description", deserialize_with = "null_as_default")]
    pub description: String,
    /// Deployment stage the entry was published for.
    #[serde(rename = "offset_stage", deserialize_with = "null_as_prod")]
    pub stage: String,
}

impl Default for ConfigHolidayOffset {
    fn default() -> Self {
        Self {
            ethio_year: 0,
            hijri_year: 0,
            greg_year: 0,
            eid_al_fitr: 0,
            eid_al_adha: 0,
            mawlid: 0,
            ramadan_start: 0,
            update_timestamp: 0,
            description: String::new(),
            stage: "prod".to_string(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_prod<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(|| "prod".to_string()))
}

impl ConfigHolidayOffset {
    /// Return `true` if the entry has been confirmed at least once.
    pub fn is_confirmed(&self) -> bool {
        self.update_timestamp > 0
    }

    /// Whether corrections meant for `ethiopian_year` may be applied.
    pub fn applies_to_year(&self, ethiopian_year: i32) -> bool {
        self.ethio_year == ethiopian_year
    }

    /// Whether corrections meant for `ethiopian_year` and `hijri_year` may be
    /// applied.
    pub fn applies_to(&self, ethiopian_year: i32, hijri_year: i32) -> bool {
        self.applies_to_year(ethiopian_year) && self.hijri_year == hijri_year
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<ConfigHolidayOffset>),
    One(ConfigHolidayOffset),
}

/// All known correction entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffsetTable {
    entries: Vec<ConfigHolidayOffset>,
}

impl OffsetTable {
    /// Create a table from entries.
    pub fn new(entries: Vec<ConfigHolidayOffset>) -> Self {
        Self { entries }
    }

    /// Parse a JSON array of entries or a single entry object.  Blank input
    /// yields an empty table.
    ///
    /// # Errors
    /// Returns [`Error::ConfigParse`] if the input is not such JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let parsed: OneOrMany =
            serde_json::from_str(json).map_err(|e| Error::ConfigParse(e.to_string()))?;
        Ok(match parsed {
            OneOrMany::Many(entries) => Self { entries },
            OneOrMany::One(entry) => Self {
                entries: vec![entry],
            },
        })
    }

    /// Parse like [`OffsetTable::from_json`], recovering from malformed input
    /// with an empty table.
    pub fn from_json_lenient(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(table) => table,
            Err(e) => {
                warn!(target: "ethiocal::offsets", error = %e, "Ignoring holiday offset configuration");
                Self::default()
            }
        }
    }

    /// The entries in input order.
    pub fn entries(&self) -> &[ConfigHolidayOffset] {
        &self.entries
    }

    /// Return `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry for `ethiopian_year`, else the first entry, else the
    /// all-zero default.
    ///
    /// Callers still gate application on [`ConfigHolidayOffset::applies_to`],
    /// so a fallback entry for another year never shifts a date.
    pub fn offsets_for(&self, ethiopian_year: i32) -> ConfigHolidayOffset {
        self.entries
            .iter()
            .find(|e| e.ethio_year == ethiopian_year)
            .or_else(|| self.entries.first())
            .cloned()
            .unwrap_or_default()
    }
}

/// Source of the current correction snapshot.
pub trait ConfigOffsetSource: Send + Sync {
    /// The correction entry to use for `ethiopian_year`.
    fn current_offsets(&self, ethiopian_year: i32) -> ConfigHolidayOffset;
}

/// A source with no corrections.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOffsets;

impl ConfigOffsetSource for NoOffsets {
    fn current_offsets(&self, _ethiopian_year: i32) -> ConfigHolidayOffset {
        ConfigHolidayOffset::default()
    }
}

impl ConfigOffsetSource for OffsetTable {
    fn current_offsets(&self, ethiopian_year: i32) -> ConfigHolidayOffset {
        self.offsets_for(ethiopian_year)
    }
}

impl<F> ConfigOffsetSource for F
where
    F: Fn(i32) -> ConfigHolidayOffset + Send + Sync,
{
    fn current_offsets(&self, ethiopian_year: i32) -> ConfigHolidayOffset {
        self(ethiopian_year)
    }
}
