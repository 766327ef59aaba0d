use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CustomerName;

/// 1-based position of a screening in the catalog listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreeningId(pub usize);

/// Record of one successful reservation.
///
/// Fields are private and there are no setters: a ticket is only ever
/// created by a reservation and dropped by its cancellation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    id: Uuid,
    screening: ScreeningId,
    movie_title: String,
    showtime: NaiveDateTime,
    row: usize,
    col: usize,
    customer: CustomerName,
    price: Decimal,
    issued_at: DateTime<Utc>,
}

impl Ticket {
    pub(crate) fn issue(
        screening: ScreeningId,
        movie_title: &str,
        showtime: NaiveDateTime,
        row: usize,
        col: usize,
        customer: CustomerName,
        price: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            screening,
            movie_title: movie_title.to_string(),
            showtime,
            row,
            col,
            customer,
            price,
            issued_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn screening(&self) -> ScreeningId {
        self.screening
    }

    pub fn movie_title(&self) -> &str {
        &self.movie_title
    }

    pub fn showtime(&self) -> NaiveDateTime {
        self.showtime
    }

    /// Zero-based row.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Zero-based column.
    pub fn col(&self) -> usize {
        self.col
    }

    pub fn customer(&self) -> &CustomerName {
        &self.customer
    }

    /// Price captured when the ticket was issued.
    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub(crate) fn is_for_seat(&self, row: usize, col: usize) -> bool {
        self.row == row && self.col == col
    }
}
