use thiserror::Error;

/// Expected, recoverable outcomes of catalog operations.
///
/// None of these are faults: the caller decides how to present them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReservationError {
    #[error("invalid screening number")]
    InvalidScreeningIndex,

    #[error("customer name must not be empty")]
    InvalidCustomerName,

    #[error("seat is outside the seating grid")]
    OutOfBounds,

    #[error("seat is already reserved")]
    AlreadyReserved,

    // Unreserved seat and someone else's seat read the same on purpose.
    #[error("seat is not reserved or the details do not match")]
    NotReservedOrMismatch,
}

pub type ReservationResult<T> = Result<T, ReservationError>;
