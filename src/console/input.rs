use thiserror::Error;

/// Raw input the console could not turn into a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("numbers start at 1")]
    NotPositive,

    #[error("unknown menu option '{0}'")]
    UnknownOption(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    ListScreenings,
    ShowSeats,
    Reserve,
    Cancel,
    ViewTicket,
    TicketCount,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 7] = [
        MenuItem::ListScreenings,
        MenuItem::ShowSeats,
        MenuItem::Reserve,
        MenuItem::Cancel,
        MenuItem::ViewTicket,
        MenuItem::TicketCount,
        MenuItem::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::ListScreenings => "List screenings",
            MenuItem::ShowSeats => "Show seats",
            MenuItem::Reserve => "Reserve a seat",
            MenuItem::Cancel => "Cancel a reservation",
            MenuItem::ViewTicket => "View ticket",
            MenuItem::TicketCount => "Tickets issued",
            MenuItem::Exit => "Exit",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let position = raw
            .trim()
            .parse::<usize>()
            .map_err(|_| ParseError::UnknownOption(raw.trim().to_string()))?;
        position
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| ParseError::UnknownOption(raw.trim().to_string()))
    }
}

/// Parses a 1-based number as typed by the user.
pub fn parse_number(raw: &str) -> Result<usize, ParseError> {
    let trimmed = raw.trim();
    let value = trimmed
        .parse::<usize>()
        .map_err(|_| ParseError::NotANumber(trimmed.to_string()))?;
    if value == 0 {
        return Err(ParseError::NotPositive);
    }
    Ok(value)
}

/// Parses a 1-based row or column and converts it to the zero-based form
/// the catalog works with.
pub fn parse_seat_coordinate(raw: &str) -> Result<usize, ParseError> {
    parse_number(raw).map(|value| value - 1)
}
