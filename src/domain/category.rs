//! Product category enumeration

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::CatalogError;

/// The eight fixed product categories.
///
/// The variant order is the canonical enumeration order used by the
/// pricing reports; serialized form is the uppercase name (`"TOP"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Top,
    Outer,
    Pants,
    Sneakers,
    Bag,
    Hat,
    Socks,
    Accessory,
}

impl Category {
    /// All categories in enumeration order.
    pub const ALL: [Category; 8] = [
        Category::Top,
        Category::Outer,
        Category::Pants,
        Category::Sneakers,
        Category::Bag,
        Category::Hat,
        Category::Socks,
        Category::Accessory,
    ];

    /// Stable uppercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "TOP",
            Self::Outer => "OUTER",
            Self::Pants => "PANTS",
            Self::Sneakers => "SNEAKERS",
            Self::Bag => "BAG",
            Self::Hat => "HAT",
            Self::Socks => "SOCKS",
            Self::Accessory => "ACCESSORY",
        }
    }

    /// Case-insensitive lookup by name.
    ///
    /// Empty or unrecognized input is `InvalidCategory`; there is no
    /// default category.
    pub fn parse(name: &str) -> Result<Category, CatalogError> {
        match name.trim().to_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "outer" => Ok(Self::Outer),
            "pants" => Ok(Self::Pants),
            "sneakers" => Ok(Self::Sneakers),
            "bag" => Ok(Self::Bag),
            "hat" => Ok(Self::Hat),
            "socks" => Ok(Self::Socks),
            "accessory" => Ok(Self::Accessory),
            _ => Err(CatalogError::InvalidCategory),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Category::parse("top").unwrap(), Category::Top);
        assert_eq!(Category::parse("TOP").unwrap(), Category::Top);
        assert_eq!(Category::parse("Sneakers").unwrap(), Category::Sneakers);
        assert_eq!(Category::parse(" accessory ").unwrap(), Category::Accessory);
    }

    #[test]
    fn parse_rejects_empty_and_unknown() {
        assert_eq!(Category::parse("").unwrap_err(), CatalogError::InvalidCategory);
        assert_eq!(Category::parse("   ").unwrap_err(), CatalogError::InvalidCategory);
        assert_eq!(Category::parse("shoes").unwrap_err(), CatalogError::InvalidCategory);
    }

    #[test]
    fn enumeration_order_is_fixed() {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            names,
            ["TOP", "OUTER", "PANTS", "SNEAKERS", "BAG", "HAT", "SOCKS", "ACCESSORY"]
        );
    }

    #[test]
    fn serializes_as_uppercase_name() {
        assert_eq!(serde_json::to_string(&Category::Bag).unwrap(), "\"BAG\"");
    }
}
