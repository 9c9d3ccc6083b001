pub mod calls;
pub mod inspector;

pub use crate::domain::model::{Credentials, Data, Feed};
pub use crate::domain::ports::{ApiCall, DumpSink};
pub use crate::utils::error::Result;
