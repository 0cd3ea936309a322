/// Spending category assigned to a parsed expense.
///
/// Declaration order matters: the classifier walks categories in this order
/// and the first one with a matching keyword wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    FoodAndDrinks,
    Shopping,
    Transportation,
    Entertainment,
    BillsAndUtilities,
    Healthcare,
    Education,
    Travel,
    Personal,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FoodAndDrinks => "Food & Drinks",
            Self::Shopping => "Shopping",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::BillsAndUtilities => "Bills & Utilities",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Travel => "Travel",
            Self::Personal => "Personal",
            Self::Other => "Other",
        }
    }

    /// Case-insensitive lookup by display name. Unknown names map to `Other`.
    pub fn parse(s: &str) -> Self {
        Self::from_name(s).unwrap_or(Self::Other)
    }

    /// Strict variant of [`Category::parse`] that reports unknown names.
    pub fn from_name(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str().to_lowercase() == lower)
    }

    pub fn all() -> &'static [Category] {
        &[
            Self::FoodAndDrinks,
            Self::Shopping,
            Self::Transportation,
            Self::Entertainment,
            Self::BillsAndUtilities,
            Self::Healthcare,
            Self::Education,
            Self::Travel,
            Self::Personal,
            Self::Other,
        ]
    }

    pub fn is_catch_all(&self) -> bool {
        matches!(self, Self::Other)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
