pub mod account;
pub mod daytime;
pub mod selector;
pub mod time_slot;
