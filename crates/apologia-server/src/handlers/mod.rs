//! Request handlers, grouped by concern.

pub mod accounts;
pub mod billing;
pub mod chat;
pub mod meta;
