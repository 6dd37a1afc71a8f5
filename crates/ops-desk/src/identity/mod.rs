//! Operator identity: turning the email handed over by the identity
//! provider into the names the desk renders.

mod names;
mod profile;
mod resolver;
mod roster;
pub mod router;

pub use names::KNOWN_FIRST_NAMES;
pub use profile::{greeting, initials, DayPeriod, OperatorProfile};
pub use resolver::{resolve, ParsedName};
pub use roster::{RosterImportError, RosterImporter, RosterProfile};
pub use router::{identity_router, parse_clock_time};
