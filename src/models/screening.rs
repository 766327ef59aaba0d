use chrono::NaiveDateTime;
use std::sync::Arc;

use super::{CustomerName, Movie, ScreeningId, Seat, SeatGrid, Ticket, SEAT_COLS, SEAT_ROWS};
use crate::error::{ReservationError, ReservationResult};

/// Reserve/cancel contract of a bookable showing.
pub trait Reservable {
    fn reserve(&mut self, customer: &CustomerName, row: usize, col: usize) -> ReservationResult<Ticket>;

    fn cancel(&mut self, customer: &CustomerName, row: usize, col: usize) -> ReservationResult<()>;

    fn find_ticket(&self, customer: &CustomerName, row: usize, col: usize) -> Option<&Ticket>;
}

/// One showing of a movie with its own seat grid and issued tickets.
///
/// A ticket exists for `(row, col)` exactly when that seat is reserved, and
/// it names the same customer as the seat.
#[derive(Debug, Clone)]
pub struct Screening {
    id: ScreeningId,
    movie: Arc<Movie>,
    time: NaiveDateTime,
    screen_number: u32,
    seats: [[Seat; SEAT_COLS]; SEAT_ROWS],
    tickets: Vec<Ticket>,
}

impl Screening {
    pub fn new(id: ScreeningId, movie: Arc<Movie>, time: NaiveDateTime, screen_number: u32) -> Self {
        Self {
            id,
            movie,
            time,
            screen_number,
            seats: Default::default(),
            tickets: Vec::new(),
        }
    }

    pub fn id(&self) -> ScreeningId {
        self.id
    }

    pub fn movie(&self) -> &Movie {
        &self.movie
    }

    pub fn time(&self) -> NaiveDateTime {
        self.time
    }

    pub fn screen_number(&self) -> u32 {
        self.screen_number
    }

    /// Issued tickets, oldest first.
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn seat_grid(&self) -> SeatGrid {
        std::array::from_fn(|row| std::array::from_fn(|col| self.seats[row][col].status()))
    }

    pub fn available_seats(&self) -> usize {
        self.seats
            .iter()
            .flatten()
            .filter(|seat| !seat.is_reserved())
            .count()
    }

    fn seat_mut(&mut self, row: usize, col: usize) -> ReservationResult<&mut Seat> {
        self.seats
            .get_mut(row)
            .and_then(|cols| cols.get_mut(col))
            .ok_or(ReservationError::OutOfBounds)
    }
}

impl Reservable for Screening {
    fn reserve(&mut self, customer: &CustomerName, row: usize, col: usize) -> ReservationResult<Ticket> {
        if !self.seat_mut(row, col)?.reserve(customer) {
            return Err(ReservationError::AlreadyReserved);
        }

        let ticket = Ticket::issue(
            self.id,
            self.movie.title(),
            self.time,
            row,
            col,
            customer.clone(),
            self.movie.price(),
        );
        self.tickets.push(ticket.clone());
        Ok(ticket)
    }

    fn cancel(&mut self, customer: &CustomerName, row: usize, col: usize) -> ReservationResult<()> {
        if !self.seat_mut(row, col)?.cancel(customer) {
            return Err(ReservationError::NotReservedOrMismatch);
        }

        // The seat check already matched the name; at most one ticket sits on a seat.
        self.tickets.retain(|ticket| !ticket.is_for_seat(row, col));
        Ok(())
    }

    fn find_ticket(&self, customer: &CustomerName, row: usize, col: usize) -> Option<&Ticket> {
        self.tickets
            .iter()
            .find(|ticket| ticket.is_for_seat(row, col) && ticket.customer() == customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MovieCategory, SeatStatus};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn screening(category: MovieCategory) -> Screening {
        let movie = Movie::new("Thunderbolts*", "SF", 148, dec!(15000), category);
        let time = NaiveDate::from_ymd_opt(2025, 5, 11)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap();
        Screening::new(ScreeningId(1), Arc::new(movie), time, 1)
    }

    fn name(raw: &str) -> CustomerName {
        CustomerName::parse(raw).unwrap()
    }

    #[test]
    fn test_reserve_issues_ticket_with_movie_price() {
        let mut standard = screening(MovieCategory::Standard);
        let ticket = standard.reserve(&name("Alice"), 1, 1).unwrap();
        assert_eq!(ticket.price(), dec!(15000));
        assert_eq!((ticket.row(), ticket.col()), (1, 1));
        assert_eq!(ticket.screening(), ScreeningId(1));
        assert_eq!(standard.tickets(), &[ticket]);

        let mut premium = screening(MovieCategory::Premium);
        let ticket = premium.reserve(&name("Alice"), 0, 4).unwrap();
        assert_eq!(ticket.price(), dec!(18000));
    }

    #[test]
    fn test_reserve_out_of_bounds_leaves_grid_untouched() {
        let mut s = screening(MovieCategory::Standard);
        assert_eq!(s.reserve(&name("Alice"), 5, 0), Err(ReservationError::OutOfBounds));
        assert_eq!(s.reserve(&name("Alice"), 0, 5), Err(ReservationError::OutOfBounds));
        assert_eq!(s.cancel(&name("Alice"), 7, 7), Err(ReservationError::OutOfBounds));
        assert_eq!(s.available_seats(), SEAT_ROWS * SEAT_COLS);
        assert!(s.tickets().is_empty());
    }

    #[test]
    fn test_reserve_taken_seat_is_rejected() {
        let mut s = screening(MovieCategory::Standard);
        s.reserve(&name("Alice"), 2, 3).unwrap();
        assert_eq!(s.reserve(&name("Bob"), 2, 3), Err(ReservationError::AlreadyReserved));
        assert_eq!(s.tickets().len(), 1);
        assert_eq!(s.tickets()[0].customer(), &name("Alice"));
    }

    #[test]
    fn test_cancel_by_other_customer_is_rejected() {
        let mut s = screening(MovieCategory::Standard);
        s.reserve(&name("Alice"), 2, 3).unwrap();
        assert_eq!(s.cancel(&name("Bob"), 2, 3), Err(ReservationError::NotReservedOrMismatch));
        assert_eq!(s.seat_grid()[2][3], SeatStatus::Reserved);
        assert_eq!(s.tickets().len(), 1);
    }

    #[test]
    fn test_cancel_removes_ticket_and_frees_seat() {
        let mut s = screening(MovieCategory::Standard);
        s.reserve(&name("Alice"), 2, 3).unwrap();
        s.reserve(&name("Carol"), 0, 0).unwrap();

        s.cancel(&name("Alice"), 2, 3).unwrap();

        assert_eq!(s.seat_grid()[2][3], SeatStatus::Free);
        assert_eq!(s.tickets().len(), 1);
        assert_eq!(s.tickets()[0].customer(), &name("Carol"));
        assert_eq!(s.cancel(&name("Alice"), 2, 3), Err(ReservationError::NotReservedOrMismatch));
    }

    #[test]
    fn test_find_ticket_requires_exact_match() {
        let mut s = screening(MovieCategory::Standard);
        let issued = s.reserve(&name("Alice"), 4, 4).unwrap();

        assert_eq!(s.find_ticket(&name("Alice"), 4, 4), Some(&issued));
        assert_eq!(s.find_ticket(&name("alice"), 4, 4), None);
        assert_eq!(s.find_ticket(&name("Alice"), 4, 3), None);
        assert_eq!(s.find_ticket(&name("Alice"), 40, 4), None);
    }

    #[test]
    fn test_seat_grid_reflects_reservations() {
        let mut s = screening(MovieCategory::Standard);
        s.reserve(&name("Alice"), 0, 1).unwrap();
        s.reserve(&name("Bob"), 3, 2).unwrap();

        let grid = s.seat_grid();
        let reserved: Vec<(usize, usize)> = (0..SEAT_ROWS)
            .flat_map(|r| (0..SEAT_COLS).map(move |c| (r, c)))
            .filter(|&(r, c)| grid[r][c].is_reserved())
            .collect();
        assert_eq!(reserved, vec![(0, 1), (3, 2)]);
        assert_eq!(s.available_seats(), 23);
    }
}
