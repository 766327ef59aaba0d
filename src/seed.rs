use chrono::NaiveDateTime;
use rust_decimal_macros::dec;
use std::sync::Arc;
use tracing::info;

use crate::catalog::Catalog;
use crate::models::{Movie, MovieCategory};

pub const SHOWTIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Builds the opening-day catalog: one standard and one premium showing.
pub fn opening_catalog(theater_name: &str) -> Result<Catalog, chrono::ParseError> {
    let mut catalog = Catalog::new(theater_name);

    let standard = Arc::new(Movie::new(
        "Thunderbolts*",
        "SF",
        148,
        dec!(15000),
        MovieCategory::Standard,
    ));
    let premium = Arc::new(Movie::new(
        "Mission: Impossible",
        "SF",
        162,
        dec!(15000),
        MovieCategory::Premium,
    ));

    catalog.add_screening(standard, NaiveDateTime::parse_from_str("2025-05-11 14:00", SHOWTIME_FORMAT)?, 1);
    catalog.add_screening(premium, NaiveDateTime::parse_from_str("2025-05-11 17:00", SHOWTIME_FORMAT)?, 2);

    info!("Seeded {} screenings for {}", catalog.len(), theater_name);
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_catalog_has_standard_and_premium_showings() {
        let catalog = opening_catalog("LKH Cinema").unwrap();
        let listing = catalog.list_screenings();

        assert_eq!(catalog.theater_name(), "LKH Cinema");
        assert_eq!(listing.len(), 2);

        assert_eq!(listing[0].movie.category, MovieCategory::Standard);
        assert_eq!(listing[0].movie.price, dec!(15000));
        assert_eq!(listing[0].screen_number, 1);
        assert_eq!(listing[0].time.format(SHOWTIME_FORMAT).to_string(), "2025-05-11 14:00");

        assert_eq!(listing[1].movie.category, MovieCategory::Premium);
        assert_eq!(listing[1].movie.price, dec!(18000));
        assert_eq!(listing[1].screen_number, 2);

        assert!(listing.iter().all(|s| s.available_seats == 25));
        assert_eq!(catalog.tickets_issued(), 0);
    }
}
