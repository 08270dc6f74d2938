//! Category value object - the aisle a pantry item belongs to

use serde::{Deserialize, Serialize};

/// Grocery category.
///
/// The ten named variants are the vocabulary offered at entry time. Imported
/// tables are not re-validated, so an unknown label survives as `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    FruitsVegetables,
    DairyEggs,
    Bakery,
    MeatSeafood,
    PantryStaples,
    FrozenFoods,
    Beverages,
    Snacks,
    PersonalCare,
    CleaningSupplies,
    Custom(String),
}

impl Category {
    /// Entry-time vocabulary, in menu order.
    pub const ALL: [Category; 10] = [
        Category::FruitsVegetables,
        Category::DairyEggs,
        Category::Bakery,
        Category::MeatSeafood,
        Category::PantryStaples,
        Category::FrozenFoods,
        Category::Beverages,
        Category::Snacks,
        Category::PersonalCare,
        Category::CleaningSupplies,
    ];

    pub fn label(&self) -> &str {
        match self {
            Category::FruitsVegetables => "Fruits & Vegetables",
            Category::DairyEggs => "Dairy & Eggs",
            Category::Bakery => "Bakery",
            Category::MeatSeafood => "Meat & Seafood",
            Category::PantryStaples => "Pantry Staples",
            Category::FrozenFoods => "Frozen Foods",
            Category::Beverages => "Beverages",
            Category::Snacks => "Snacks",
            Category::PersonalCare => "Personal Care",
            Category::CleaningSupplies => "Cleaning Supplies",
            Category::Custom(label) => label,
        }
    }

    /// Short flag-friendly name, e.g. `dairy-eggs`.
    pub fn slug(&self) -> String {
        self.label()
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Exact label match against the vocabulary, falling back to `Custom`.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .iter()
            .find(|c| c.label() == label)
            .cloned()
            .unwrap_or_else(|| Category::Custom(label.to_string()))
    }

    /// Lenient lookup used for command-line input: label or slug, any case.
    pub fn parse_known(input: &str) -> Option<Self> {
        let needle = input.trim();
        Self::ALL
            .iter()
            .find(|c| c.label().eq_ignore_ascii_case(needle) || c.slug() == needle.to_lowercase())
            .cloned()
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Custom(_))
    }

    /// Index into [`Category::ALL`], if this is a vocabulary value.
    pub fn position(&self) -> Option<usize> {
        Self::ALL.iter().position(|c| c == self)
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::from_label(&label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::parse_known(s).ok_or_else(|| {
            let options: Vec<String> = Category::ALL.iter().map(|c| c.slug()).collect();
            format!("unknown category '{}' (expected one of: {})", s, options.join(", "))
        })
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
