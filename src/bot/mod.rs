/// Command parsing and dispatch for the chat surface
pub mod command;
