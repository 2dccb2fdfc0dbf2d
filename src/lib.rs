pub use crate::errors::BlessError;
pub use crate::resolver::{Resolver, ACTUAL_SUFFIX, EXPECT_SUFFIX, RESOURCES_DIR};

pub mod apply;
pub mod cli;
pub mod confirm;
pub mod errors;
pub mod resolver;
