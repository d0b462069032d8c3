//! Hwbot Core
//!
//! Core types and pure logic for the homework status bot.
//!
//! This crate contains:
//! - Domain types: review status codes and their verdict texts
//! - Response validation: shape checks for the status API payload
//! - Status parsing: turning a submission record into a notification text
//!
//! Everything here is side-effect free; the HTTP edges live in `hwbot-client`.

pub mod domain;
pub mod response;

pub use domain::homework::HomeworkStatus;
pub use response::{ResponseError, check_response, parse_status};
