//! Cardwise: pick the best owned credit card per spend category and forecast
//! reward accrual from recent spending.

pub mod catalog;
pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod import;
pub mod logging;
pub mod models;

pub use error::{Result, RewardError};
