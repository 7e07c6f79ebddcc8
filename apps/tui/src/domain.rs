use serde::{Deserialize, Serialize};

/// Normalizes a raw enumeration string for lenient matching: lowercase, no
/// whitespace, no separators. "Mini Van", "mini-van" and "MiniVan" all collapse
/// to "minivan".
fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleClass {
    Scorpio,
    Bolero,
    Safari,
    #[serde(rename = "Mini Van")]
    MiniVan,
}

impl VehicleClass {
    pub const ALL: [Self; 4] = [Self::Scorpio, Self::Bolero, Self::Safari, Self::MiniVan];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scorpio => "scorpio",
            Self::Bolero => "bolero",
            Self::Safari => "safari",
            Self::MiniVan => "minivan",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Scorpio),
            1 => Some(Self::Bolero),
            2 => Some(Self::Safari),
            3 => Some(Self::MiniVan),
            _ => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match normalize(value).as_str() {
            "scorpio" => Some(Self::Scorpio),
            "bolero" => Some(Self::Bolero),
            "safari" => Some(Self::Safari),
            "minivan" => Some(Self::MiniVan),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Scorpio => "Scorpio",
            Self::Bolero => "Bolero",
            Self::Safari => "Safari",
            Self::MiniVan => "Mini Van",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Active,
    Idle,
    Maintenance,
}

impl VehicleStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Idle, Self::Maintenance];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Idle => "idle",
            Self::Maintenance => "maintenance",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Active),
            1 => Some(Self::Idle),
            2 => Some(Self::Maintenance),
            _ => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match normalize(value).as_str() {
            "active" => Some(Self::Active),
            "idle" => Some(Self::Idle),
            "maintenance" => Some(Self::Maintenance),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Idle => "Idle",
            Self::Maintenance => "Maintenance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shift {
    #[serde(rename = "Shift A")]
    A,
    #[serde(rename = "Shift B")]
    B,
    #[serde(rename = "Shift C")]
    C,
}

impl Shift {
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "shift-a",
            Self::B => "shift-b",
            Self::C => "shift-c",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::A),
            1 => Some(Self::B),
            2 => Some(Self::C),
            _ => None,
        }
    }

    /// Accepts "Shift A", "shift-a" and the bare letter "a".
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = normalize(value);
        match normalized.strip_prefix("shift").unwrap_or(&normalized) {
            "a" => Some(Self::A),
            "b" => Some(Self::B),
            "c" => Some(Self::C),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "Shift A",
            Self::B => "Shift B",
            Self::C => "Shift C",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceStatus {
    Excellent,
    Good,
    Fair,
    Repair,
}

impl MaintenanceStatus {
    pub const ALL: [Self; 4] = [Self::Excellent, Self::Good, Self::Fair, Self::Repair];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Repair => "repair",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Excellent),
            1 => Some(Self::Good),
            2 => Some(Self::Fair),
            3 => Some(Self::Repair),
            _ => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match normalize(value).as_str() {
            "excellent" => Some(Self::Excellent),
            "good" => Some(Self::Good),
            "fair" => Some(Self::Fair),
            "repair" => Some(Self::Repair),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Repair => "Repair",
        }
    }
}

/// Who operates a vehicle: the company itself or a third-party vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ownership {
    Own,
    Vendor,
}

impl Ownership {
    pub const ALL: [Self; 2] = [Self::Own, Self::Vendor];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Own => "own",
            Self::Vendor => "vendor",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Own),
            1 => Some(Self::Vendor),
            _ => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match normalize(value).as_str() {
            "own" | "owned" => Some(Self::Own),
            "vendor" | "vendors" => Some(Self::Vendor),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Own => "Own Vehicles",
            Self::Vendor => "Vendor Vehicles",
        }
    }
}

/// The vendor roster vehicles are drawn from.
pub const VENDOR_ROSTER: [&str; 7] = [
    "Thriveni Vehicles",
    "Chintamani Devi",
    "Neha Kumari",
    "Suraj Tiwari",
    "Sabita Devi",
    "Sanjay",
    "John",
];

/// The leading roster entries are the company's own fleet operators.
const OWN_VENDOR_COUNT: usize = 3;

/// Looks a vendor name up on the roster, exactly as written.
pub fn roster_vendor(name: &str) -> Option<&'static str> {
    VENDOR_ROSTER.iter().copied().find(|vendor| *vendor == name)
}

/// Classifies a roster vendor. Snapshots only admit roster names, so every
/// entry past the company-owned ones is third-party.
pub fn ownership_of(vendor: &str) -> Ownership {
    if VENDOR_ROSTER[..OWN_VENDOR_COUNT].contains(&vendor) {
        Ownership::Own
    } else {
        Ownership::Vendor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_class_parse_is_lenient() {
        assert_eq!(VehicleClass::parse("Mini Van"), Some(VehicleClass::MiniVan));
        assert_eq!(VehicleClass::parse("minivan"), Some(VehicleClass::MiniVan));
        assert_eq!(VehicleClass::parse(" SCORPIO "), Some(VehicleClass::Scorpio));
        assert_eq!(VehicleClass::parse("tractor"), None);
    }

    #[test]
    fn shift_parse_accepts_letter_and_label() {
        assert_eq!(Shift::parse("Shift B"), Some(Shift::B));
        assert_eq!(Shift::parse("shift-c"), Some(Shift::C));
        assert_eq!(Shift::parse("a"), Some(Shift::A));
        assert_eq!(Shift::parse("Shift D"), None);
    }

    #[test]
    fn from_index_covers_all_variants() {
        for (index, class) in VehicleClass::ALL.iter().enumerate() {
            assert_eq!(VehicleClass::from_index(index), Some(*class));
        }
        assert_eq!(VehicleClass::from_index(VehicleClass::ALL.len()), None);
        assert_eq!(VehicleStatus::from_index(3), None);
        assert_eq!(MaintenanceStatus::from_index(3), Some(MaintenanceStatus::Repair));
    }

    #[test]
    fn as_str_round_trips_through_parse() {
        for status in VehicleStatus::ALL {
            assert_eq!(VehicleStatus::parse(status.as_str()), Some(status));
        }
        for shift in Shift::ALL {
            assert_eq!(Shift::parse(shift.as_str()), Some(shift));
            assert_eq!(Shift::parse(shift.label()), Some(shift));
        }
        for status in MaintenanceStatus::ALL {
            assert_eq!(MaintenanceStatus::parse(status.label()), Some(status));
        }
    }

    #[test]
    fn ownership_follows_roster_position() {
        assert_eq!(ownership_of("Thriveni Vehicles"), Ownership::Own);
        assert_eq!(ownership_of("Neha Kumari"), Ownership::Own);
        assert_eq!(ownership_of("Suraj Tiwari"), Ownership::Vendor);
        assert_eq!(ownership_of("John"), Ownership::Vendor);
    }

    #[test]
    fn roster_lookup_is_exact() {
        assert_eq!(roster_vendor("Sabita Devi"), Some("Sabita Devi"));
        assert_eq!(roster_vendor("sabita devi"), None);
        assert_eq!(roster_vendor("Acme Rentals"), None);
    }

    #[test]
    fn serde_uses_display_labels() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&VehicleClass::MiniVan)?, "\"Mini Van\"");
        assert_eq!(serde_json::to_string(&Shift::A)?, "\"Shift A\"");
        assert_eq!(serde_json::to_string(&VehicleStatus::Idle)?, "\"idle\"");
        Ok(())
    }
}
