//! Family handlers: add, list, statement view.

mod add_family;
mod get_family_statement;
mod list_families;

pub use add_family::{AddFamilyCommand, AddFamilyHandler};
pub use get_family_statement::{GetFamilyStatementHandler, GetFamilyStatementQuery};
pub use list_families::{ListFamiliesHandler, ListFamiliesQuery};
