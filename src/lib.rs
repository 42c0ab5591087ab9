//! pingbridge: a permission-request hook that asks a remote approval service.
//!
//! The hook binary (`pingbridge-hook`) reads one tool call from stdin, turns
//! it into a question, POSTs it to the approval service, waits for a human
//! to answer, and prints the allow/deny decision. The `pingbridge` binary is
//! the operator CLI around it.

pub mod approval;
pub mod audit;
pub mod bridge;
pub mod cli;
pub mod config;
pub mod decision;
pub mod error;
pub mod request;
pub mod utils;
