pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{
    Conversion, InputRecord, InvalidInputPolicy, OutputFormat, Rejection, TransformResult,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
