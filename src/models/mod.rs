pub mod customer;
pub mod movie;
pub mod screening;
pub mod seat;
pub mod ticket;

pub use customer::CustomerName;
pub use movie::{Movie, MovieCategory, MovieSummary};
pub use screening::{Reservable, Screening};
pub use seat::{Seat, SeatGrid, SeatStatus, SEAT_COLS, SEAT_ROWS};
pub use ticket::{ScreeningId, Ticket};
