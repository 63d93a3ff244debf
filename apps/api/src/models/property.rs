//! Property listing input: the read-only record every generator renders from.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Content language. Drives template phrasebooks and prompt wording.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pt,
    Es,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
            Language::Es => "es",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Sale,
    Rent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub neighborhood: String,
}

/// Physical features. Optional flags default to absent and are treated as false.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Features {
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area_sqm: f64,
    #[serde(default)]
    pub balcony: Option<bool>,
    #[serde(default)]
    pub parking: Option<bool>,
    #[serde(default)]
    pub elevator: Option<bool>,
    #[serde(default)]
    pub floor: Option<i32>,
    #[serde(default)]
    pub year_built: Option<i32>,
}

impl Features {
    pub fn has_balcony(&self) -> bool {
        self.balcony.unwrap_or(false)
    }

    pub fn has_parking(&self) -> bool {
        self.parking.unwrap_or(false)
    }

    pub fn has_elevator(&self) -> bool {
        self.elevator.unwrap_or(false)
    }
}

/// Request body for `POST /generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyInput {
    pub location: Location,
    pub features: Features,
    /// Asking price (sale) or monthly rent, in EUR.
    pub price: f64,
    pub listing_type: ListingType,
    #[serde(default)]
    pub language: Language,
}

impl PropertyInput {
    pub fn is_sale(&self) -> bool {
        self.listing_type == ListingType::Sale
    }

    /// Rejects values that deserialize fine but cannot be rendered sensibly.
    pub fn validate(&self) -> Result<(), AppError> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(AppError::Validation(
                "price must be a non-negative number".to_string(),
            ));
        }
        if !self.features.area_sqm.is_finite() || self.features.area_sqm < 0.0 {
            return Err(AppError::Validation(
                "features.area_sqm must be a non-negative number".to_string(),
            ));
        }
        if self.location.city.trim().is_empty() {
            return Err(AppError::Validation(
                "location.city cannot be empty".to_string(),
            ));
        }
        for (field, value) in [
            ("location.city", &self.location.city),
            ("location.neighborhood", &self.location.neighborhood),
        ] {
            if value.chars().any(char::is_control) {
                return Err(AppError::Validation(format!(
                    "{field} cannot contain line breaks or control characters"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// The Campo de Ourique listing used across generator tests.
    pub fn lisbon_sale(language: Language) -> PropertyInput {
        PropertyInput {
            location: Location {
                city: "Lisbon".to_string(),
                neighborhood: "Campo de Ourique".to_string(),
            },
            features: Features {
                bedrooms: 3,
                bathrooms: 2,
                area_sqm: 120.0,
                balcony: Some(true),
                parking: Some(false),
                elevator: Some(true),
                floor: Some(2),
                year_built: Some(2005),
            },
            price: 650_000.0,
            listing_type: ListingType::Sale,
            language,
        }
    }

    /// Only the required fields; every optional feature absent.
    pub fn minimal(language: Language) -> PropertyInput {
        PropertyInput {
            location: Location {
                city: "Porto".to_string(),
                neighborhood: "Bonfim".to_string(),
            },
            features: Features {
                bedrooms: 1,
                bathrooms: 1,
                area_sqm: 45.0,
                balcony: None,
                parking: None,
                elevator: None,
                floor: None,
                year_built: None,
            },
            price: 900.0,
            listing_type: ListingType::Rent,
            language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_defaults_to_english() {
        let json = serde_json::json!({
            "location": {"city": "Lisbon", "neighborhood": "Chiado"},
            "features": {"bedrooms": 2, "bathrooms": 1, "area_sqm": 80},
            "price": 450000,
            "listing_type": "sale"
        });
        let input: PropertyInput = serde_json::from_value(json).unwrap();
        assert_eq!(input.language, Language::En);
        assert!(input.features.balcony.is_none());
        assert!(!input.features.has_parking());
    }

    #[test]
    fn test_unknown_listing_type_rejected() {
        let json = serde_json::json!({
            "location": {"city": "Lisbon", "neighborhood": "Chiado"},
            "features": {"bedrooms": 2, "bathrooms": 1, "area_sqm": 80},
            "price": 450000,
            "listing_type": "lease"
        });
        assert!(serde_json::from_value::<PropertyInput>(json).is_err());
    }

    #[test]
    fn test_extra_title_field_ignored() {
        let json = serde_json::json!({
            "title": "T2 in Chiado",
            "location": {"city": "Lisbon", "neighborhood": "Chiado"},
            "features": {"bedrooms": 2, "bathrooms": 1, "area_sqm": 80},
            "price": 450000,
            "listing_type": "rent",
            "language": "pt"
        });
        let input: PropertyInput = serde_json::from_value(json).unwrap();
        assert_eq!(input.language, Language::Pt);
        assert!(!input.is_sale());
    }

    #[test]
    fn test_negative_price_fails_validation() {
        let mut input = fixtures::lisbon_sale(Language::En);
        input.price = -1.0;
        assert!(matches!(input.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_blank_city_fails_validation() {
        let mut input = fixtures::lisbon_sale(Language::En);
        input.location.city = "  ".to_string();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_line_break_in_location_fails_validation() {
        let mut input = fixtures::lisbon_sale(Language::En);
        input.location.neighborhood = "Campo de Ourique\nNorth".to_string();
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("location.neighborhood"));

        let mut input = fixtures::lisbon_sale(Language::En);
        input.location.city = "Lis\rbon".to_string();
        assert!(matches!(input.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_fixture_passes_validation() {
        assert!(fixtures::lisbon_sale(Language::Es).validate().is_ok());
        assert!(fixtures::minimal(Language::Pt).validate().is_ok());
    }
}
