mod base;
mod interface;
mod middleware;
mod schema;

pub(crate) use base::*;
pub use base::ParseError;
pub(crate) use interface::*;
pub use middleware::*;
pub use schema::ConfigError;
