pub mod cli;
pub mod cmd;
pub mod dynamo;
pub mod engine;
pub mod error;
pub mod item;
pub mod store;

pub use cmd::{Config, Operation};
pub use dynamo::DynamoTable;
pub use engine::Engine;
pub use error::{KvError, Result};
pub use item::Item;
pub use store::{MemoryTable, Table};
