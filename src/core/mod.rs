pub mod etl;
pub mod filter;
pub mod parse;
pub mod pipeline;

pub use crate::domain::model::{AttributeValue, FilteredSet, Record};
pub use crate::domain::ports::{ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
