//! Display-text lookup for holidays.
//!
//! The calculators own no strings: titles, descriptions, and celebrations are
//! fetched by key from a [`ResourceProvider`].  For a holiday key `k` the
//! description lives under `k_history` and the celebration under
//! `k_celebration`; missing entries fall back to the generic
//! `holiday_default_description` / `holiday_default_celebration` texts.

use std::collections::HashMap;

/// Localised text lookup.
///
/// Implementations return the key itself when no text is known.
pub trait ResourceProvider: Send + Sync {
    /// Text for `key`, or `key` when unknown.
    fn get_string(&self, key: &str) -> String;
}

impl ResourceProvider for HashMap<String, String> {
    fn get_string(&self, key: &str) -> String {
        self.get(key).cloned().unwrap_or_else(|| key.to_string())
    }
}

/// Built-in English titles.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultResources;

impl ResourceProvider for DefaultResources {
    fn get_string(&self, key: &str) -> String {
        let text = match key {
            // Orthodox
            "holiday_orthodox_nineveh" => "Nineveh Fast",
            "holiday_orthodox_abiy_tsom" => "Great Lent",
            "holiday_orthodox_debre_zeit" => "Debre Zeit",
            "holiday_orthodox_hosanna" => "Palm Sunday",
            "holiday_orthodox_siklet" => "Good Friday",
            "holiday_orthodox_fasika" => "Easter",
            "holiday_orthodox_rikbe_kahinat" => "Rikbe Kahinat",
            "holiday_orthodox_erget" => "Ascension",
            "holiday_orthodox_peraklitos" => "Pentecost",
            "holiday_orthodox_tsome_hawariat" => "Apostles' Fast",
            "holiday_orthodox_tsome_dihnet" => "Assumption Fast",
            "holiday_orthodox_ghad" => "Epiphany Eve",
            "holiday_orthodox_kana_zegelila" => "Wedding at Cana",
            "holiday_orthodox_lideta_mariam" => "Birth of Mary",
            "holiday_orthodox_filseta" => "Assumption of Mary",
            "holiday_orthodox_debre_tabor" => "Transfiguration",

            // Public
            "holiday_public_enkutatash" => "Ethiopian New Year",
            "holiday_public_christian_meskel" => "Meskel",
            "holiday_public_christian_genna" => "Ethiopian Christmas",
            "holiday_public_christian_timket" => "Timket (Epiphany)",
            "holiday_public_adwa" => "Adwa Victory Day",
            "holiday_public_labour_day" => "Labor Day",
            "holiday_public_patriots_day" => "Patriots' Day",

            // Muslim
            "holiday_muslim_eid_fitr" => "Eid al-Fitr",
            "holiday_muslim_eid_adha" => "Eid al-Adha",
            "holiday_muslim_mawlid" => "Mawlid",
            "holiday_muslim_hijri_new_year" => "Islamic New Year",
            "holiday_muslim_ashura" => "Ashura",
            "holiday_muslim_ramadan_start" => "Start of Ramadan",
            "holiday_muslim_mid_shaban" => "Mid-Sha'ban",

            "holiday_default_description" => "Traditional Ethiopian holiday",
            "holiday_default_celebration" => "Celebrated throughout Ethiopia",
            _ => key,
        };
        text.to_string()
    }
}

/// Resolved text for one holiday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HolidayText {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) celebration: String,
}

impl HolidayText {
    /// Look up the title, description, and celebration for `key`.
    pub(crate) fn lookup(resources: &dyn ResourceProvider, key: &str) -> Self {
        Self {
            title: resources.get_string(key),
            description: or_default(resources, &format!("{key}_history"), "holiday_default_description"),
            celebration: or_default(
                resources,
                &format!("{key}_celebration"),
                "holiday_default_celebration",
            ),
        }
    }

    #[cfg(test)]
    pub(crate) fn plain(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: String::new(),
            celebration: String::new(),
        }
    }
}

fn or_default(resources: &dyn ResourceProvider, key: &str, fallback: &str) -> String {
    let text = resources.get_string(key);
    if text == key {
        resources.get_string(fallback)
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(DefaultResources.get_string("no_such_key"), "no_such_key");
        assert_eq!(DefaultResources.get_string("holiday_orthodox_fasika"), "Easter");
    }

    #[test]
    fn lookup_uses_generic_texts() {
        let text = HolidayText::lookup(&DefaultResources, "holiday_public_adwa");
        assert_eq!(text.title, "Adwa Victory Day");
        assert_eq!(text.description, "Traditional Ethiopian holiday");
        assert_eq!(text.celebration, "Celebrated throughout Ethiopia");
    }

    #[test]
    fn map_provider_overrides() {
        let mut map = HashMap::new();
        map.insert("holiday_public_adwa".to_string(), "የዓድዋ ድል".to_string());
        map.insert(
            "holiday_public_adwa_history".to_string(),
            "Victory at Adwa, 1896".to_string(),
        );
        let text = HolidayText::lookup(&map, "holiday_public_adwa");
        assert_eq!(text.title, "የዓድዋ ድል");
        assert_eq!(text.description, "Victory at Adwa, 1896");
        assert_eq!(text.celebration, "holiday_default_celebration");
    }
}
