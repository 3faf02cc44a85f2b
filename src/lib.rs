//! Statistics over a log of timestamped activity intervals: how many days the log covers, how
//! often and how long each activity happened, and which activities are almost always short.
//!

pub mod analysis;
pub mod cli;
pub mod error;
pub mod fs;
pub mod model;
pub mod utils;
