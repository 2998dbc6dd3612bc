//! Value objects - immutable types that represent domain concepts

mod public_flags;
mod snowflake;

pub use public_flags::PublicFlags;
pub use snowflake::{Snowflake, SnowflakeParseError};
