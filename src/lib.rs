//! Idempotent insertion of the "Fotogalerie" menu entry into the
//! pre-rendered pages of the club website.

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod patch;
