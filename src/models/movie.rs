use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pricing category of a movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovieCategory {
    Standard,
    Premium,
}

impl MovieCategory {
    /// Amount added on top of the base price for this category.
    pub fn surcharge(self) -> Decimal {
        match self {
            MovieCategory::Standard => Decimal::ZERO,
            MovieCategory::Premium => dec!(3000),
        }
    }
}

impl fmt::Display for MovieCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovieCategory::Standard => f.write_str("Standard"),
            MovieCategory::Premium => f.write_str("Premium"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    title: String,
    genre: String,
    duration_minutes: u32,
    base_price: Decimal,
    category: MovieCategory,
}

/// Read-only view of a movie for listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieSummary {
    pub title: String,
    pub genre: String,
    pub duration_minutes: u32,
    pub category: MovieCategory,
    pub price: Decimal,
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        duration_minutes: u32,
        base_price: Decimal,
        category: MovieCategory,
    ) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
            duration_minutes,
            base_price,
            category,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Ticket price, derived from the base price and the category surcharge.
    pub fn price(&self) -> Decimal {
        self.base_price + self.category.surcharge()
    }

    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            title: self.title.clone(),
            genre: self.genre.clone(),
            duration_minutes: self.duration_minutes,
            category: self.category,
            price: self.price(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_price_is_base_price() {
        let movie = Movie::new("Thunderbolts*", "SF", 148, dec!(15000), MovieCategory::Standard);
        assert_eq!(movie.price(), dec!(15000));
    }

    #[test]
    fn test_premium_price_adds_surcharge() {
        let movie = Movie::new("Mission: Impossible", "SF", 162, dec!(15000), MovieCategory::Premium);
        assert_eq!(movie.price(), dec!(18000));
    }

    #[test]
    fn test_summary_carries_derived_price() {
        let movie = Movie::new("Mission: Impossible", "SF", 162, dec!(12500), MovieCategory::Premium);
        let summary = movie.summary();
        assert_eq!(summary.title, "Mission: Impossible");
        assert_eq!(summary.duration_minutes, 162);
        assert_eq!(summary.price, dec!(15500));
    }
}
