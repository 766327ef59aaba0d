//! Catalog of screenings: the aggregate every front end talks to.
//!
//! Each screening sits behind its own `RwLock`, so reservations on one
//! screening are serialized while lookups may run side by side. The issued
//! ticket counter is shared across all screenings and never goes down.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

use crate::error::{ReservationError, ReservationResult};
use crate::models::{
    CustomerName, Movie, MovieSummary, Reservable, Screening, ScreeningId, SeatGrid, Ticket,
};

/// One row of the screening listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreeningSummary {
    pub index: ScreeningId,
    pub movie: MovieSummary,
    pub time: NaiveDateTime,
    pub screen_number: u32,
    pub available_seats: usize,
}

/// Owned copy of one screening, taken under its read lock and detached from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreeningView {
    pub index: ScreeningId,
    pub movie: MovieSummary,
    pub time: NaiveDateTime,
    pub screen_number: u32,
    pub seats: SeatGrid,
    pub tickets: Vec<Ticket>,
}

#[derive(Debug)]
pub struct Catalog {
    theater_name: String,
    screenings: Vec<RwLock<Screening>>,
    tickets_issued: AtomicU64,
}

impl Catalog {
    pub fn new(theater_name: impl Into<String>) -> Self {
        Self {
            theater_name: theater_name.into(),
            screenings: Vec::new(),
            tickets_issued: AtomicU64::new(0),
        }
    }

    pub fn theater_name(&self) -> &str {
        &self.theater_name
    }

    /// Adds a screening with a fresh seat grid and returns its 1-based index.
    pub fn add_screening(&mut self, movie: Arc<Movie>, time: NaiveDateTime, screen_number: u32) -> ScreeningId {
        let id = ScreeningId(self.screenings.len() + 1);
        self.screenings
            .push(RwLock::new(Screening::new(id, movie, time, screen_number)));
        id
    }

    pub fn len(&self) -> usize {
        self.screenings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screenings.is_empty()
    }

    pub fn list_screenings(&self) -> Vec<ScreeningSummary> {
        self.screenings
            .iter()
            .map(|slot| {
                let screening = read(slot);
                ScreeningSummary {
                    index: screening.id(),
                    movie: screening.movie().summary(),
                    time: screening.time(),
                    screen_number: screening.screen_number(),
                    available_seats: screening.available_seats(),
                }
            })
            .collect()
    }

    /// Checks a 1-based index without taking the screening's lock.
    pub fn resolve(&self, index: usize) -> ReservationResult<ScreeningId> {
        self.slot(index).map(|_| ScreeningId(index))
    }

    /// Snapshot of a screening by its 1-based index. Holding it never blocks
    /// reservations.
    pub fn screening(&self, index: usize) -> ReservationResult<ScreeningView> {
        let screening = read(self.slot(index)?);
        Ok(ScreeningView {
            index: screening.id(),
            movie: screening.movie().summary(),
            time: screening.time(),
            screen_number: screening.screen_number(),
            seats: screening.seat_grid(),
            tickets: screening.tickets().to_vec(),
        })
    }

    pub fn seat_grid(&self, index: usize) -> ReservationResult<SeatGrid> {
        Ok(read(self.slot(index)?).seat_grid())
    }

    pub fn reserve(&self, index: usize, customer: &str, row: usize, col: usize) -> ReservationResult<Ticket> {
        let customer = CustomerName::parse(customer)?;
        let slot = self.slot(index)?;

        let ticket = write(slot)
            .reserve(&customer, row, col)
            .inspect_err(|e| debug!(screening = index, row, col, "reservation rejected: {}", e))?;

        let issued = self.tickets_issued.fetch_add(1, Ordering::Relaxed) + 1;
        info!(
            screening = index,
            row,
            col,
            ticket_id = %ticket.id(),
            tickets_issued = issued,
            "seat reserved"
        );
        Ok(ticket)
    }

    pub fn cancel(&self, index: usize, customer: &str, row: usize, col: usize) -> ReservationResult<()> {
        let customer = CustomerName::parse(customer)?;
        let slot = self.slot(index)?;

        write(slot)
            .cancel(&customer, row, col)
            .inspect_err(|e| debug!(screening = index, row, col, "cancellation rejected: {}", e))?;

        info!(screening = index, row, col, "reservation cancelled");
        Ok(())
    }

    /// Looks up the ticket held by `customer` on a seat.
    ///
    /// A miss is reported the same way whether the seat is free or held by
    /// someone else.
    pub fn find_ticket(&self, index: usize, customer: &str, row: usize, col: usize) -> ReservationResult<Ticket> {
        let customer = CustomerName::parse(customer)?;
        let screening = read(self.slot(index)?);
        screening
            .find_ticket(&customer, row, col)
            .cloned()
            .ok_or(ReservationError::NotReservedOrMismatch)
    }

    /// Tickets ever issued, cancellations included.
    pub fn tickets_issued(&self) -> u64 {
        self.tickets_issued.load(Ordering::Relaxed)
    }

    fn slot(&self, index: usize) -> ReservationResult<&RwLock<Screening>> {
        index
            .checked_sub(1)
            .and_then(|i| self.screenings.get(i))
            .ok_or(ReservationError::InvalidScreeningIndex)
    }
}

// Mutations never panic half way, so a poisoned lock still guards consistent state.
fn read(slot: &RwLock<Screening>) -> RwLockReadGuard<'_, Screening> {
    slot.read().unwrap_or_else(PoisonError::into_inner)
}

fn write(slot: &RwLock<Screening>) -> RwLockWriteGuard<'_, Screening> {
    slot.write().unwrap_or_else(PoisonError::into_inner)
}
