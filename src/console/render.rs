use crate::catalog::ScreeningSummary;
use crate::models::{SeatGrid, Ticket};
use crate::seed::SHOWTIME_FORMAT;

pub fn screening_listing(screenings: &[ScreeningSummary]) -> String {
    let mut out = String::from("Screenings:\n");
    for s in screenings {
        out.push_str(&format!(
            "  {}. {} ({}, {} min, {}) | {} | screen {} | {} won | {} seats free\n",
            s.index.0,
            s.movie.title,
            s.movie.genre,
            s.movie.duration_minutes,
            s.movie.category,
            s.time.format(SHOWTIME_FORMAT),
            s.screen_number,
            s.movie.price,
            s.available_seats,
        ));
    }
    out
}

/// `O` for a free seat, `X` for a reserved one, rows top to bottom.
pub fn seat_grid(index: usize, grid: &SeatGrid) -> String {
    let mut out = format!("Screening {} seats (O: free, X: reserved)\n", index);
    for row in grid {
        let cells: Vec<&str> = row
            .iter()
            .map(|seat| if seat.is_reserved() { "X" } else { "O" })
            .collect();
        out.push_str(&format!("  {}\n", cells.join(" ")));
    }
    out
}

pub fn ticket(ticket: &Ticket) -> String {
    format!(
        "Ticket {} (screening {}): {} | {} | seat ({}, {}) | {} | {} won | issued {}",
        ticket.id(),
        ticket.screening().0,
        ticket.movie_title(),
        ticket.showtime().format(SHOWTIME_FORMAT),
        ticket.row() + 1,
        ticket.col() + 1,
        ticket.customer(),
        ticket.price(),
        ticket.issued_at().format("%Y-%m-%d %H:%M UTC"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CustomerName, Movie, MovieCategory, Reservable, Screening, ScreeningId, SeatStatus};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    #[test]
    fn test_ticket_line_shows_one_based_seat_and_issue_time() {
        let movie = Movie::new("Thunderbolts*", "SF", 148, dec!(15000), MovieCategory::Standard);
        let time = NaiveDate::from_ymd_opt(2025, 5, 11)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap();
        let mut screening = Screening::new(ScreeningId(1), Arc::new(movie), time, 1);
        let ticket = screening
            .reserve(&CustomerName::parse("Alice").unwrap(), 0, 2)
            .unwrap();

        let line = super::ticket(&ticket);
        assert!(line.contains("(screening 1): Thunderbolts* | 2025-05-11 14:00 | seat (1, 3) | Alice | 15000 won"));
        assert!(line.ends_with(&format!("issued {}", ticket.issued_at().format("%Y-%m-%d %H:%M UTC"))));
    }

    #[test]
    fn test_seat_grid_marks_reserved_seats() {
        let mut grid = [[SeatStatus::Free; 5]; 5];
        grid[0][4] = SeatStatus::Reserved;
        grid[2][0] = SeatStatus::Reserved;

        let rendered = seat_grid(1, &grid);
        let rows: Vec<&str> = rendered.lines().skip(1).collect();
        assert_eq!(rows, vec!["  O O O O X", "  O O O O O", "  X O O O O", "  O O O O O", "  O O O O O"]);
    }
}
