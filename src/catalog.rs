//! Static appliance reference data
//!
//! Nominal power draw and typical daily usage for every appliance the
//! estimator understands, plus the room types offered to users and the
//! mapping from object-detector class names to appliance identifiers.

use serde::Serialize;

/// Identifier for the manually entered plug point / outlet count
pub const PLUG_POINT: &str = "plug_point";

/// Appliances assumed to exist once per household, however many rooms report them
pub const WHOLE_HOME_APPLIANCES: &[&str] = &["refrigerator", "washing machine", "water heater"];

/// Room types offered for photo upload and manual entry
pub const ROOM_TYPES: &[&str] = &[
    "Living Room",
    "Bedroom",
    "Kitchen",
    "Bathroom",
    "Balcony",
    "Other",
];

/// Nominal electrical profile of one appliance type
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ApplianceSpec {
    /// Catalog identifier (e.g. "air conditioner")
    pub id: &'static str,
    /// Power draw in watts
    pub watts: f64,
    /// Typical usage in hours per day
    pub hours_per_day: f64,
    /// Human-readable label
    pub label: &'static str,
}

const fn spec(
    id: &'static str,
    watts: f64,
    hours_per_day: f64,
    label: &'static str,
) -> ApplianceSpec {
    ApplianceSpec {
        id,
        watts,
        hours_per_day,
        label,
    }
}

static CATALOG: &[ApplianceSpec] = &[
    spec("tv", 150.0, 6.0, "Television"),
    spec("refrigerator", 250.0, 24.0, "Refrigerator"),
    spec("microwave", 1200.0, 0.5, "Microwave"),
    spec("fan", 75.0, 12.0, "Ceiling Fan"),
    spec("laptop", 65.0, 6.0, "Laptop"),
    spec("cell phone", 10.0, 2.0, "Phone Charger"),
    spec("oven", 2000.0, 0.5, "Oven/OTG"),
    spec("toaster", 800.0, 0.25, "Toaster"),
    spec("clock", 5.0, 24.0, "Clock"),
    spec("washing machine", 500.0, 1.0, "Washing Machine"),
    spec("air conditioner", 1500.0, 8.0, "Air Conditioner"),
    spec("water heater", 2000.0, 0.5, "Water Heater"),
    spec(PLUG_POINT, 5.0, 24.0, "Plug Point (Standby)"),
];

/// Detector classes that correspond to a catalog appliance
static DETECTOR_CLASSES: &[(&str, &str)] = &[
    ("tv", "tv"),
    ("refrigerator", "refrigerator"),
    ("microwave", "microwave"),
    ("fan", "fan"),
    ("laptop", "laptop"),
    ("cell phone", "cell phone"),
    ("oven", "oven"),
    ("toaster", "toaster"),
    ("clock", "clock"),
];

/// Look up an appliance by identifier
///
/// Returns `None` for identifiers the catalog does not know.
///
/// # Examples
///
/// ```
/// use home_carbon::catalog;
///
/// let fridge = catalog::lookup("refrigerator").unwrap();
/// assert_eq!(fridge.watts, 250.0);
/// assert!(catalog::lookup("hoverboard").is_none());
/// ```
pub fn lookup(id: &str) -> Option<&'static ApplianceSpec> {
    CATALOG.iter().find(|spec| spec.id == id)
}

/// Display label for an identifier, falling back to the identifier itself
pub fn label_for(id: &str) -> &str {
    lookup(id).map_or(id, |spec| spec.label)
}

/// Whether the appliance should be counted once per household
pub fn is_whole_home(id: &str) -> bool {
    WHOLE_HOME_APPLIANCES.contains(&id)
}

/// All catalog entries in table order
pub fn all() -> impl Iterator<Item = &'static ApplianceSpec> {
    CATALOG.iter()
}

/// Map an object-detector class name onto a catalog appliance identifier
pub fn detector_class_to_appliance(class_name: &str) -> Option<&'static str> {
    DETECTOR_CLASSES
        .iter()
        .find(|(class, _)| *class == class_name)
        .map(|(_, id)| *id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_appliance_returns_spec() {
        let ac = lookup("air conditioner").unwrap();
        assert_eq!(ac.watts, 1500.0);
        assert_eq!(ac.hours_per_day, 8.0);
        assert_eq!(ac.label, "Air Conditioner");
    }

    #[test]
    fn test_lookup_unknown_appliance_returns_none() {
        assert!(lookup("jacuzzi").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_catalog_entries_are_well_formed() {
        for spec in all() {
            assert!(spec.watts > 0.0, "{} must draw power", spec.id);
            assert!(spec.hours_per_day >= 0.0, "{} has negative hours", spec.id);
            assert!(!spec.label.is_empty());
        }
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: Vec<_> = all().map(|s| s.id).collect();
        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len());
    }

    #[test]
    fn test_whole_home_appliances_are_in_catalog() {
        for id in WHOLE_HOME_APPLIANCES {
            assert!(lookup(id).is_some(), "{} missing from catalog", id);
            assert!(is_whole_home(id));
        }
        assert!(!is_whole_home("fan"));
        assert!(!is_whole_home(PLUG_POINT));
    }

    #[test]
    fn test_label_for_falls_back_to_id() {
        assert_eq!(label_for("fan"), "Ceiling Fan");
        assert_eq!(label_for("plug_point"), "Plug Point (Standby)");
        assert_eq!(label_for("sauna"), "sauna");
    }

    #[test]
    fn test_detector_classes_map_to_catalog_entries() {
        assert_eq!(detector_class_to_appliance("tv"), Some("tv"));
        assert_eq!(
            detector_class_to_appliance("cell phone"),
            Some("cell phone")
        );
        assert_eq!(detector_class_to_appliance("person"), None);
        for (_, id) in DETECTOR_CLASSES {
            assert!(lookup(id).is_some());
        }
    }

    #[test]
    fn test_room_types_start_with_living_room() {
        assert_eq!(ROOM_TYPES.len(), 6);
        assert_eq!(ROOM_TYPES[0], "Living Room");
        assert!(ROOM_TYPES.contains(&"Kitchen"));
    }
}
