//! The booking state machine.

use std::fmt;
use std::io::{BufRead, Write};

use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use crate::domain::{BoardingPass, Passenger, Train, format_timestamp, join_departure};
use crate::eta::{compute_eta, parse_departure, sentinel_departure};
use crate::fare::discount;
use crate::menu::Menu;
use crate::prompt::Prompter;
use crate::receipt::ReceiptWriter;
use crate::schedule::ScheduleStore;
use crate::tickets::TicketStore;

use super::config::BookingConfig;
use super::error::BookingError;

/// Greeting shown in the banner at the start of a session.
pub const WELCOME: &str = "Welcome to the World Fastest Train";

/// Shown once before the first menu.
pub const SELECTION_HINT: &str =
    "For the following prompts, select your option by typing in the number.\n";

/// Shown when the chosen departure cannot be read back as a timestamp.
pub const DEPARTURE_NOT_SAVED: &str =
    "An internal error has occurred. Departure date is not saved.\n";

/// Frame `message` between two rules of dashes.
///
/// ```
/// use train_booking::booking::banner;
///
/// assert_eq!(banner("Hi"), "+--+\n+Hi+\n+--+\n");
/// ```
pub fn banner(message: &str) -> String {
    let rule = "-".repeat(message.chars().count());
    format!("+{rule}+\n+{message}+\n+{rule}+\n")
}

/// The steps of a booking, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingStep {
    CollectIdentity,
    SelectOrigin,
    SelectDestination,
    SelectDate,
    SelectTime,
    Resolve,
    Compute,
    Finalize,
}

impl fmt::Display for BookingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BookingStep::CollectIdentity => "collect identity",
            BookingStep::SelectOrigin => "select origin",
            BookingStep::SelectDestination => "select destination",
            BookingStep::SelectDate => "select date",
            BookingStep::SelectTime => "select time",
            BookingStep::Resolve => "resolve train",
            BookingStep::Compute => "compute fare and arrival",
            BookingStep::Finalize => "finalize",
        };
        f.write_str(name)
    }
}

/// A step together with everything gathered before it.
#[derive(Debug)]
enum State {
    CollectIdentity,
    SelectOrigin {
        passenger: Passenger,
    },
    SelectDestination {
        passenger: Passenger,
        origin: String,
    },
    SelectDate {
        passenger: Passenger,
        origin: String,
        destination: String,
    },
    SelectTime {
        passenger: Passenger,
        origin: String,
        destination: String,
        date: String,
    },
    Resolve {
        passenger: Passenger,
        origin: String,
        destination: String,
        departure: String,
    },
    Compute {
        passenger: Passenger,
        train: Train,
        departure: String,
    },
    Finalize {
        pass: BoardingPass,
        train: Train,
    },
}

impl State {
    fn step(&self) -> BookingStep {
        match self {
            State::CollectIdentity => BookingStep::CollectIdentity,
            State::SelectOrigin { .. } => BookingStep::SelectOrigin,
            State::SelectDestination { .. } => BookingStep::SelectDestination,
            State::SelectDate { .. } => BookingStep::SelectDate,
            State::SelectTime { .. } => BookingStep::SelectTime,
            State::Resolve { .. } => BookingStep::Resolve,
            State::Compute { .. } => BookingStep::Compute,
            State::Finalize { .. } => BookingStep::Finalize,
        }
    }
}

#[derive(Debug)]
enum Transition {
    Next(State),
    Done(BoardingPass),
}

/// One passenger's booking, from greeting to saved pass.
///
/// Collaborators are injected: the catalog to query, the ticket store and
/// receipt writer to hand the finished pass to, and the prompter that
/// talks to the passenger.
pub struct BookingSession<S, T, C, R, W> {
    schedule: S,
    tickets: T,
    receipts: C,
    config: BookingConfig,
    prompter: Prompter<R, W>,
    passenger: Option<Passenger>,
}

impl<S, T, C, R, W> BookingSession<S, T, C, R, W>
where
    S: ScheduleStore,
    T: TicketStore,
    C: ReceiptWriter,
    R: BufRead,
    W: Write,
{
    pub fn new(
        schedule: S,
        tickets: T,
        receipts: C,
        config: BookingConfig,
        prompter: Prompter<R, W>,
    ) -> Self {
        Self {
            schedule,
            tickets,
            receipts,
            config,
            prompter,
            passenger: None,
        }
    }

    /// Book for an already known passenger, skipping the identity prompts.
    pub fn with_passenger(mut self, passenger: Passenger) -> Self {
        self.passenger = Some(passenger);
        self
    }

    /// Run every step and return the saved pass.
    pub fn run(mut self) -> Result<BoardingPass, BookingError> {
        self.prompter.say(banner(WELCOME))?;

        let mut state = match self.passenger.take() {
            Some(passenger) => State::SelectOrigin { passenger },
            None => State::CollectIdentity,
        };

        loop {
            debug!(step = %state.step(), "Entering booking step");
            match self.advance(state)? {
                Transition::Next(next) => state = next,
                Transition::Done(pass) => return Ok(pass),
            }
        }
    }

    /// Complete the current step and return the one after it.
    fn advance(&mut self, state: State) -> Result<Transition, BookingError> {
        let step = state.step();

        let next = match state {
            State::CollectIdentity => State::SelectOrigin {
                passenger: self.collect_identity()?,
            },

            State::SelectOrigin { passenger } => {
                self.prompter.say(SELECTION_HINT)?;
                let origins = self.schedule.list_origins()?;
                let origin = self.pick(step, "Please select an origin:", origins)?;
                State::SelectDestination { passenger, origin }
            }

            State::SelectDestination { passenger, origin } => {
                let destinations = self.schedule.list_destinations()?;
                let destination = self.pick(step, "Please select a destination:", destinations)?;
                State::SelectDate {
                    passenger,
                    origin,
                    destination,
                }
            }

            State::SelectDate {
                passenger,
                origin,
                destination,
            } => {
                let dates = self.schedule.list_dates(&destination)?;
                let date = self.pick(step, "Please select a departure date:", dates)?;
                State::SelectTime {
                    passenger,
                    origin,
                    destination,
                    date,
                }
            }

            State::SelectTime {
                passenger,
                origin,
                destination,
                date,
            } => {
                let times = self.schedule.list_times(&date, &destination)?;
                let time = self.pick(step, "Please select a departure time:", times)?;
                State::Resolve {
                    passenger,
                    origin,
                    destination,
                    departure: join_departure(&date, &time),
                }
            }

            State::Resolve {
                passenger,
                origin,
                destination,
                departure,
            } => {
                let train = self
                    .schedule
                    .get_train(&departure, &destination)?
                    .with_origin(origin);
                info!(train = %train, "Resolved train");
                State::Compute {
                    passenger,
                    train,
                    departure,
                }
            }

            State::Compute {
                passenger,
                train,
                departure,
            } => {
                let departs = self.departure_for_eta(&departure)?;
                let eta = compute_eta(departs, train.distance, self.config.average_speed)?;
                let price = discount(train.price, passenger.age, passenger.gender);
                let pass = BoardingPass::issue(passenger, &train, eta, price)?;
                State::Finalize { pass, train }
            }

            State::Finalize { pass, train } => {
                self.tickets.save(&pass)?;
                self.receipts.write(&pass, &train)?;
                self.prompter.say(format!(
                    "Your ticket is booked: ${}, arriving {}\n",
                    pass.ticket_price(),
                    format_timestamp(&pass.eta())
                ))?;
                info!(train = %pass.train_id(), price = %pass.ticket_price(), "Booking complete");
                return Ok(Transition::Done(pass));
            }
        };

        Ok(Transition::Next(next))
    }

    fn collect_identity(&mut self) -> Result<Passenger, BookingError> {
        let name = self.prompter.ask("Please enter your Name: ")?;
        let email = self.prompter.ask("Please enter your Email: ")?;
        let phone = self
            .prompter
            .ask_phone("Please enter your Phone Number: ")?;
        let gender = self
            .prompter
            .ask_gender("Please enter your Gender (Male or Female): ")?;
        let age = self.prompter.ask_age("Please enter your Age: ")?;

        Ok(Passenger {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            phone,
            gender,
            age,
        })
    }

    /// Show a catalog list as a menu and return the chosen entry.
    fn pick(
        &mut self,
        step: BookingStep,
        title: &str,
        items: Vec<String>,
    ) -> Result<String, BookingError> {
        let menu = Menu::new(title, items);
        if menu.is_empty() {
            return Err(BookingError::NothingToSelect { step });
        }
        Ok(self.prompter.choose(&menu)?.clone())
    }

    /// The departure to measure the trip from.
    ///
    /// Text that does not parse is reported and replaced by the epoch
    /// sentinel rather than ending the booking.
    fn departure_for_eta(&mut self, departure: &str) -> Result<NaiveDateTime, BookingError> {
        match parse_departure(departure) {
            Ok(departs) => Ok(departs),
            Err(e) => {
                warn!(
                    departure = %departure,
                    error = %e,
                    "Departure could not be parsed, using epoch sentinel"
                );
                self.prompter.say(DEPARTURE_NOT_SAVED)?;
                Ok(sentinel_departure())
            }
        }
    }
}
