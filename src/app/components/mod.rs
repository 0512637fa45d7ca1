pub mod common;

pub use common::{LoadingText, PageHeader};
