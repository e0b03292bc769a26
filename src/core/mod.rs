pub mod creator;
pub mod diagram;
pub mod naming;
pub mod opener;
pub mod report;

pub use crate::domain::model::{DrawioElement, OutputFormat};
pub use crate::domain::ports::{ConfigProvider, Opener};
pub use crate::utils::error::Result;
