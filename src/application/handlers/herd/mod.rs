//! Herd handlers: cows, milk records, feed records.

mod add_cow;
mod list_cows;
mod log_feed;
mod log_milk;

pub use add_cow::{AddCowCommand, AddCowHandler};
pub use list_cows::{ListCowsHandler, ListCowsQuery};
pub use log_feed::{LogFeedCommand, LogFeedHandler};
pub use log_milk::{LogMilkCommand, LogMilkHandler};
