//! Sales and product reports built from flat `;`-separated salesmen, product and
//! sales files.
#![forbid(unsafe_code)]

pub mod compute;
pub mod config;
pub mod data;
pub mod generate;
pub mod logging;
pub mod pipeline;
pub mod read;
pub mod write;
