//! Line-oriented console front end.
//!
//! Mirrors the box-office menu: list screenings, show seats, reserve, cancel,
//! view a ticket, count issued tickets, exit. Everything the user types is
//! parsed here; the catalog only ever sees numbers and trimmed names.

pub mod input;
pub mod render;

use anyhow::Context;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::error::ReservationError;
use crate::models::CustomerName;
use input::{parse_number, parse_seat_coordinate, MenuItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
}

enum Answer<T> {
    Given(T),
    Rejected,
    Closed,
}

// Unwraps an answer or leaves the current menu action.
macro_rules! answer {
    ($ask:expr) => {
        match $ask.await? {
            Answer::Given(value) => value,
            Answer::Rejected => return Ok(Step::Continue),
            Answer::Closed => return Ok(Step::Exit),
        }
    };
}

pub struct Console<R, W> {
    catalog: Arc<Catalog>,
    lines: Lines<R>,
    out: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(catalog: Arc<Catalog>, input: R, output: W) -> Self {
        Self {
            catalog,
            lines: input.lines(),
            out: output,
        }
    }

    /// Runs the menu loop until the user picks Exit or input ends.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let banner = format!("Welcome to {}!\n", self.catalog.theater_name());
        self.say(&banner).await?;

        loop {
            self.say(&menu()).await?;
            let Some(line) = self.read_line("Select an option: ").await? else {
                break;
            };

            let step = match MenuItem::parse(&line) {
                Ok(item) => self.handle(item).await?,
                Err(e) => {
                    warn!("menu input rejected: {}", e);
                    self.say(&format!("Invalid input: {}\n", e)).await?;
                    Step::Continue
                }
            };
            if step == Step::Exit {
                break;
            }
        }

        info!("Console session finished");
        self.say("Goodbye.\n").await
    }

    async fn handle(&mut self, item: MenuItem) -> anyhow::Result<Step> {
        match item {
            MenuItem::ListScreenings => {
                let listing = render::screening_listing(&self.catalog.list_screenings());
                self.say(&listing).await?;
            }
            MenuItem::ShowSeats => {
                let index = answer!(self.ask_screening());
                match self.catalog.seat_grid(index) {
                    Ok(grid) => self.say(&render::seat_grid(index, &grid)).await?,
                    Err(e) => self.report("Cannot show seats", e).await?,
                }
            }
            MenuItem::Reserve => {
                let index = answer!(self.ask_screening());
                let customer = answer!(self.ask_customer());
                let row = answer!(self.ask_coordinate("Row"));
                let col = answer!(self.ask_coordinate("Column"));
                match self.catalog.reserve(index, customer.as_str(), row, col) {
                    Ok(ticket) => {
                        let text = format!("Reservation confirmed.\n{}\n", render::ticket(&ticket));
                        self.say(&text).await?;
                    }
                    Err(e) => self.report("Reservation failed", e).await?,
                }
            }
            MenuItem::Cancel => {
                let index = answer!(self.ask_screening());
                let customer = answer!(self.ask_customer());
                let row = answer!(self.ask_coordinate("Row"));
                let col = answer!(self.ask_coordinate("Column"));
                match self.catalog.cancel(index, customer.as_str(), row, col) {
                    Ok(()) => self.say("Reservation cancelled.\n").await?,
                    Err(e) => self.report("Cancellation failed", e).await?,
                }
            }
            MenuItem::ViewTicket => {
                let index = answer!(self.ask_screening());
                let customer = answer!(self.ask_customer());
                let row = answer!(self.ask_coordinate("Row"));
                let col = answer!(self.ask_coordinate("Column"));
                match self.catalog.find_ticket(index, customer.as_str(), row, col) {
                    Ok(ticket) => self.say(&format!("{}\n", render::ticket(&ticket))).await?,
                    Err(e) => self.report("Ticket lookup failed", e).await?,
                }
            }
            MenuItem::TicketCount => {
                let text = format!("Tickets issued: {}\n", self.catalog.tickets_issued());
                self.say(&text).await?;
            }
            MenuItem::Exit => return Ok(Step::Exit),
        }
        Ok(Step::Continue)
    }

    async fn ask_screening(&mut self) -> anyhow::Result<Answer<usize>> {
        let question = format!("Screening number (1-{}): ", self.catalog.len());
        let catalog = Arc::clone(&self.catalog);
        self.ask(&question, move |raw| {
            let index = parse_number(raw)?;
            catalog.resolve(index)?;
            Ok(index)
        })
        .await
    }

    async fn ask_customer(&mut self) -> anyhow::Result<Answer<CustomerName>> {
        self.ask("Customer name: ", |raw| Ok(CustomerName::parse(raw)?))
            .await
    }

    async fn ask_coordinate(&mut self, label: &str) -> anyhow::Result<Answer<usize>> {
        let question = format!("{} (1-5): ", label);
        self.ask(&question, |raw| Ok(parse_seat_coordinate(raw)?))
            .await
    }

    async fn ask<T>(
        &mut self,
        question: &str,
        parse: impl FnOnce(&str) -> anyhow::Result<T>,
    ) -> anyhow::Result<Answer<T>> {
        let Some(line) = self.read_line(question).await? else {
            return Ok(Answer::Closed);
        };
        match parse(&line) {
            Ok(value) => Ok(Answer::Given(value)),
            Err(e) => {
                warn!("input rejected: {}", e);
                self.say(&format!("Invalid input: {}\n", e)).await?;
                Ok(Answer::Rejected)
            }
        }
    }

    async fn report(&mut self, action: &str, error: ReservationError) -> anyhow::Result<()> {
        self.say(&format!("{}: {}\n", action, error)).await
    }

    async fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        self.say(prompt).await?;
        self.lines
            .next_line()
            .await
            .context("failed to read console input")
    }

    async fn say(&mut self, text: &str) -> anyhow::Result<()> {
        self.out
            .write_all(text.as_bytes())
            .await
            .context("failed to write console output")?;
        self.out.flush().await.context("failed to flush console output")
    }
}

fn menu() -> String {
    let mut out = String::from("\n");
    for (position, item) in MenuItem::ALL.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", position + 1, item.label()));
    }
    out
}
