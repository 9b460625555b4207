//! `tripmap` - Render location history as a filterable web map
//!
//! This library reads a location-history export, extracts position samples,
//! filters them by calendar date, and renders them as weekday-colored
//! markers on a Leaflet map served behind a minimal web form.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod map;
pub mod options;
pub mod page;
pub mod pipeline;
pub mod sample;
pub mod server;
pub mod timeline;

pub use config::Config;
pub use error::{Error, Result};
pub use filter::DateFilter;
pub use logging::init_logging;
pub use sample::PositionSample;
pub use timeline::TimelineDocument;
