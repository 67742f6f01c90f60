//! Types shared between the view coordinator and its hosts.

pub mod domain;
pub mod error;
pub mod protocol;
