//! Message form and message table

mod message_form;
mod message_table;

pub use message_form::MessageForm;
pub use message_table::MessageTable;
