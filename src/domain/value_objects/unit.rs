//! Unit value object - what an amount is measured in

use serde::{Deserialize, Serialize};

/// Unit of measure for pantry amounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Unit {
    #[default]
    Pieces,
    Kilograms,
    Grams,
    Pounds,
    Ounces,
    Liters,
    Milliliters,
    Pack,
    Box,
    Custom(String),
}

impl Unit {
    /// Entry-time vocabulary, in menu order.
    pub const ALL: [Unit; 9] = [
        Unit::Pieces,
        Unit::Kilograms,
        Unit::Grams,
        Unit::Pounds,
        Unit::Ounces,
        Unit::Liters,
        Unit::Milliliters,
        Unit::Pack,
        Unit::Box,
    ];

    pub fn label(&self) -> &str {
        match self {
            Unit::Pieces => "pcs",
            Unit::Kilograms => "kg",
            Unit::Grams => "g",
            Unit::Pounds => "lb",
            Unit::Ounces => "oz",
            Unit::Liters => "L",
            Unit::Milliliters => "mL",
            Unit::Pack => "pack",
            Unit::Box => "box",
            Unit::Custom(label) => label,
        }
    }

    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .iter()
            .find(|u| u.label() == label)
            .cloned()
            .unwrap_or_else(|| Unit::Custom(label.to_string()))
    }

    /// Case-insensitive lookup for command-line input (`l` means litres).
    pub fn parse_known(input: &str) -> Option<Self> {
        let needle = input.trim();
        Self::ALL
            .iter()
            .find(|u| u.label().eq_ignore_ascii_case(needle))
            .cloned()
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Unit::Custom(_))
    }

    pub fn position(&self) -> Option<usize> {
        Self::ALL.iter().position(|u| u == self)
    }
}

impl From<String> for Unit {
    fn from(label: String) -> Self {
        Unit::from_label(&label)
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.label().to_string()
    }
}

impl std::str::FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::parse_known(s).ok_or_else(|| {
            let options: Vec<String> = Unit::ALL.iter().map(|u| u.label().to_string()).collect();
            format!("unknown unit '{}' (expected one of: {})", s, options.join(", "))
        })
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
