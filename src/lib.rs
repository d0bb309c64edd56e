pub mod browser;
pub mod env;
pub mod error;
pub mod exec;
pub mod git;
pub mod pipeline;
pub mod routing;

pub use error::OpenError;
pub use pipeline::{open, resolve, Target};
pub use routing::{MatchMode, Route, RouteOptions};
