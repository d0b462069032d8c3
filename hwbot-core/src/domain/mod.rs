//! Core domain types
//!
//! This module contains the domain structures shared between the validation
//! layer and the poller: the closed set of review status codes and the fixed
//! verdict text attached to each.

pub mod homework;
