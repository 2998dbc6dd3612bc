//! Ports - interfaces the domain needs from the outside world

mod source;

pub use source::{StatusResult, StatusSource};
