pub use error::{Error, Result};
pub use cache::{Cache, Value};
pub use history::CallHistory;
pub use engines::{MemStore, StoreEngine};

mod error;
mod cache;
mod history;
mod engines;
