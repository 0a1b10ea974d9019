use log::debug;

use crate::error::{KvError, Result};
use crate::item::Item;

/// The three primitives the tool needs from a table.
pub trait Table {
    /// Returns every item, in whatever order the store hands them back.
    fn scan(&mut self) -> Result<Vec<Item>>;

    /// Creates or replaces the item keyed by `item.name`.
    fn put(&mut self, item: &Item) -> Result<()>;

    /// Removes the item keyed by `name`.
    fn delete(&mut self, name: &str) -> Result<()>;
}

/// A request as seen by `MemoryTable`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Scan,
    Put(Item),
    Delete(String),
}

/// In-process table that keeps insertion order and records every request.
#[derive(Debug, Default)]
pub struct MemoryTable {
    items: Vec<Item>,
    requests: Vec<Request>,
    fail_on: Option<String>,
    fail_scan: bool,
}

impl MemoryTable {
    pub fn new() -> MemoryTable {
        MemoryTable::default()
    }

    /// Makes any put or delete of `name` fail with a storage error.
    pub fn failing_on(mut self, name: impl Into<String>) -> MemoryTable {
        self.fail_on = Some(name.into());
        self
    }

    /// Makes every scan fail with a storage error.
    pub fn failing_scan(mut self) -> MemoryTable {
        self.fail_scan = true;
        self
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    fn check(&self, name: &str) -> Result<()> {
        match &self.fail_on {
            Some(bad) if bad == name => Err(KvError::Storage(format!(
                "ProvisionedThroughputExceededException: write to {} rejected",
                name
            ))),
            _ => Ok(()),
        }
    }
}

impl Table for MemoryTable {
    fn scan(&mut self) -> Result<Vec<Item>> {
        self.requests.push(Request::Scan);
        if self.fail_scan {
            return Err(KvError::Storage(
                "AccessDeniedException: not authorized to perform dynamodb:Scan".to_string(),
            ));
        }
        Ok(self.items.clone())
    }

    fn put(&mut self, item: &Item) -> Result<()> {
        self.requests.push(Request::Put(item.clone()));
        self.check(&item.name)?;
        match self.items.iter_mut().find(|i| i.name == item.name) {
            Some(existing) => existing.value = item.value.clone(),
            None => self.items.push(item.clone()),
        }
        debug!("memory table holds {} items", self.items.len());
        Ok(())
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        self.requests.push(Request::Delete(name.to_string()));
        self.check(name)?;
        self.items.retain(|i| i.name != name);
        Ok(())
    }
}
