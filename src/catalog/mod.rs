//! Common household appliances with their typical power draw

use crate::core::{Error, Result};

/// A catalog entry: display label and nominal wattage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appliance {
    pub name: &'static str,
    pub power_watts: f64,
}

/// Label of the "no selection" sentinel at the top of the catalog
pub const NO_SELECTION: &str = "Pilih perangkat...";

const APPLIANCES: &[Appliance] = &[
    Appliance { name: NO_SELECTION, power_watts: 0.0 },
    Appliance { name: "AC (1 PK)", power_watts: 700.0 },
    Appliance { name: "TV LED (32-inch)", power_watts: 50.0 },
    Appliance { name: "TV LED (42-inch)", power_watts: 60.0 },
    Appliance { name: "TV LED (55-inch)", power_watts: 100.0 },
    Appliance { name: "Kulkas 1 Pintu", power_watts: 100.0 },
    Appliance { name: "Kulkas 2 Pintu", power_watts: 150.0 },
    Appliance { name: "Rice Cooker", power_watts: 700.0 },
    Appliance { name: "Kipas Angin Meja", power_watts: 35.0 },
    Appliance { name: "Kipas Angin Berdiri", power_watts: 50.0 },
    Appliance { name: "Kipas Angin Gantung", power_watts: 75.0 },
    Appliance { name: "Mesin Cuci", power_watts: 500.0 },
    Appliance { name: "Setrika", power_watts: 1000.0 },
    Appliance { name: "Oven Microwave", power_watts: 800.0 },
    Appliance { name: "Komputer Desktop", power_watts: 200.0 },
    Appliance { name: "Laptop", power_watts: 65.0 },
    Appliance { name: "Pengisi Daya Ponsel", power_watts: 5.0 },
    Appliance { name: "Lampu LED 5W", power_watts: 5.0 },
    Appliance { name: "Lampu LED 9W", power_watts: 9.0 },
    Appliance { name: "Lampu LED 13W", power_watts: 13.0 },
    Appliance { name: "Pompa Air", power_watts: 125.0 },
    Appliance { name: "Dispenser", power_watts: 350.0 },
    Appliance { name: "Water Heater", power_watts: 350.0 },
];

impl Appliance {
    /// Whether this is the "no selection" entry
    pub fn is_sentinel(&self) -> bool {
        self.power_watts <= 0.0
    }
}

/// Full catalog, sentinel first
pub fn all() -> &'static [Appliance] {
    APPLIANCES
}

/// Selectable appliances, without the sentinel
pub fn selectable() -> impl Iterator<Item = &'static Appliance> {
    APPLIANCES.iter().filter(|a| !a.is_sentinel())
}

/// Find an appliance by label, ignoring case and surrounding whitespace
pub fn find(name: &str) -> Option<&'static Appliance> {
    let name = name.trim();
    APPLIANCES.iter().find(|a| a.name.eq_ignore_ascii_case(name))
}

/// Resolve a user choice: a label or a menu number (0 is the sentinel).
///
/// An empty choice resolves to the sentinel.
pub fn lookup(choice: &str) -> Result<&'static Appliance> {
    let choice = choice.trim();
    if choice.is_empty() {
        return Ok(&APPLIANCES[0]);
    }
    if let Ok(index) = choice.parse::<usize>() {
        return APPLIANCES
            .get(index)
            .ok_or_else(|| Error::UnknownAppliance(choice.to_string()));
    }
    find(choice).ok_or_else(|| Error::UnknownAppliance(choice.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_is_first_and_zero() {
        let first = &all()[0];
        assert_eq!(first.name, NO_SELECTION);
        assert_eq!(first.power_watts, 0.0);
        assert!(first.is_sentinel());
        assert_eq!(selectable().count(), all().len() - 1);
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let fridge = find("  kulkas 2 pintu ").unwrap();
        assert_eq!(fridge.power_watts, 150.0);
        assert!(find("Toaster").is_none());
    }

    #[test]
    fn test_lookup_by_index_and_name() {
        assert_eq!(lookup("1").unwrap().name, "AC (1 PK)");
        assert!(lookup("0").unwrap().is_sentinel());
        assert!(lookup("").unwrap().is_sentinel());
        assert_eq!(lookup("Setrika").unwrap().power_watts, 1000.0);
        assert!(matches!(lookup("99"), Err(Error::UnknownAppliance(_))));
        assert!(matches!(lookup("Toaster"), Err(Error::UnknownAppliance(_))));
    }
}
