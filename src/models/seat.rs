use serde::{Deserialize, Serialize};

use super::CustomerName;

pub const SEAT_ROWS: usize = 5;
pub const SEAT_COLS: usize = 5;

/// Occupancy of one seat as shown to the outside world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatStatus {
    Free,
    Reserved,
}

impl SeatStatus {
    pub fn is_reserved(self) -> bool {
        self == SeatStatus::Reserved
    }
}

/// Read-only occupancy grid, indexed `[row][col]` from zero.
pub type SeatGrid = [[SeatStatus; SEAT_COLS]; SEAT_ROWS];

/// A single bookable cell. Reserved exactly when it holds a customer name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Seat {
    holder: Option<CustomerName>,
}

impl Seat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_reserved(&self) -> bool {
        self.holder.is_some()
    }

    pub fn status(&self) -> SeatStatus {
        if self.is_reserved() {
            SeatStatus::Reserved
        } else {
            SeatStatus::Free
        }
    }

    /// Takes the seat for `customer` if it is free.
    pub fn reserve(&mut self, customer: &CustomerName) -> bool {
        if self.holder.is_some() {
            return false;
        }
        self.holder = Some(customer.clone());
        true
    }

    /// Frees the seat, but only for the customer holding it.
    pub fn cancel(&mut self, customer: &CustomerName) -> bool {
        if self.holder.as_ref() != Some(customer) {
            return false;
        }
        self.holder = None;
        true
    }
}
