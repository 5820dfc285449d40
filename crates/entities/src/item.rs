//! Household item entity definitions.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Room/purpose category of a household item.
///
/// The set is fixed: listings and statistics iterate over [`Category::ALL`]
/// so that empty categories still show up with zero counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Kitchen appliances, utensils, tableware.
    Cozinha,
    /// Living and dining room furniture and electronics.
    SalaCopa,
    /// Bathroom and yard basics.
    BanheiroQuintal,
    /// Bedroom furniture, bedding, decoration.
    Quarto,
}

impl Category {
    /// All categories in stable listing order.
    pub const ALL: [Category; 4] = [
        Category::Cozinha,
        Category::SalaCopa,
        Category::BanheiroQuintal,
        Category::Quarto,
    ];

    /// Wire/database representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cozinha => "cozinha",
            Category::SalaCopa => "sala-copa",
            Category::BanheiroQuintal => "banheiro-quintal",
            Category::Quarto => "quarto",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Cozinha => "Itens para a Cozinha",
            Category::SalaCopa => "Itens para a Sala e Copa",
            Category::BanheiroQuintal => "Itens para Banheiro e Quintal",
            Category::Quarto => "Itens para Quarto",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cozinha" => Ok(Category::Cozinha),
            "sala-copa" => Ok(Category::SalaCopa),
            "banheiro-quintal" => Ok(Category::BanheiroQuintal),
            "quarto" => Ok(Category::Quarto),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

/// Acquisition priority of an item.
///
/// Ordered: `Baixa < Media < Alta < Essencial`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Nice to have.
    Baixa,
    /// Default priority.
    #[default]
    Media,
    /// Should be acquired soon.
    Alta,
    /// Cannot move in without it.
    Essencial,
}

impl Priority {
    /// Wire/database representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Baixa => "baixa",
            Priority::Media => "media",
            Priority::Alta => "alta",
            Priority::Essencial => "essencial",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "baixa" => Ok(Priority::Baixa),
            "media" => Ok(Priority::Media),
            "alta" => Ok(Priority::Alta),
            "essencial" => Ok(Priority::Essencial),
            other => Err(format!("unknown priority: {other}")),
        }
    }
}

/// A household item tracked by the registry.
///
/// Invariant: `acquired_at` is `Some` if and only if `acquired` is true.
/// The registry state machine is the only writer that is allowed to touch
/// the acquisition fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier.
    pub id: Uuid,
    /// Item name.
    pub name: String,
    /// Room/purpose category.
    pub category: Category,
    /// Optional sub-category label within the room.
    pub sub_category: Option<String>,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Acquisition priority.
    pub priority: Priority,
    /// Whether the couple already owns the item.
    pub acquired: bool,
    /// Optional free-text comment (who gave it, where it was bought, ...).
    pub comment: Option<String>,
    /// When the item was acquired. Present only while `acquired` is true.
    pub acquired_at: Option<DateTime<Utc>>,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
    /// When this record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Creates a new item in the `needed` state.
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            sub_category: None,
            description: None,
            priority: Priority::default(),
            acquired: false,
            comment: None,
            acquired_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the sub-category label.
    pub fn with_sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = Some(sub_category.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation_defaults() {
        let item = Item::new("Fogão", Category::Cozinha)
            .with_sub_category("Eletrodomésticos e Equipamentos")
            .with_priority(Priority::Essencial);

        assert_eq!(item.name, "Fogão");
        assert_eq!(item.category, Category::Cozinha);
        assert_eq!(item.priority, Priority::Essencial);
        assert!(!item.acquired);
        assert!(item.acquired_at.is_none());
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Essencial > Priority::Alta);
        assert!(Priority::Alta > Priority::Media);
        assert!(Priority::Media > Priority::Baixa);
    }

    #[test]
    fn test_category_wire_format() {
        let json = serde_json::to_string(&Category::BanheiroQuintal).unwrap();
        assert_eq!(json, "\"banheiro-quintal\"");

        let parsed: Category = serde_json::from_str("\"sala-copa\"").unwrap();
        assert_eq!(parsed, Category::SalaCopa);
    }

    #[test]
    fn test_category_round_trip_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_priority_wire_format() {
        let json = serde_json::to_string(&Priority::Essencial).unwrap();
        assert_eq!(json, "\"essencial\"");
        assert_eq!("media".parse::<Priority>().unwrap(), Priority::Media);
        assert!("urgente".parse::<Priority>().is_err());
    }
}
