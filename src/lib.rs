#![cfg_attr(not(test), no_std)]

mod error;
#[macro_use]
mod log;

pub mod config;
pub mod device;
pub mod interface;
pub mod measurement;
pub mod params;
pub mod registers;
pub mod sink;
pub mod status;

pub use crate::device::{DriverState, Max17043};
pub use crate::error::{Error, Result};
