use std::io::Write;

use log::{debug, warn};

use crate::cmd::Operation;
use crate::error::Result;
use crate::item::Item;
use crate::store::Table;

/// Runs a single `Operation` against a table.
pub struct Engine<T: Table> {
    table: T,
}

impl<T: Table> Engine<T> {
    pub fn new(table: T) -> Engine<T> {
        Engine { table }
    }

    #[cfg(test)]
    pub(crate) fn table(&self) -> &T {
        &self.table
    }

    /// Executes `op`, writing any scan output to `out`.
    pub fn execute<W: Write>(&mut self, op: &Operation, out: &mut W) -> Result<()> {
        match op {
            Operation::Delete { key } => self.table.delete(key),
            Operation::Scan => self.scan(out),
            Operation::Set { pairs } => self.set_many(pairs),
        }
    }

    /// Prints every item as `Name=Value`, in store order.
    fn scan<W: Write>(&mut self, out: &mut W) -> Result<()> {
        for item in self.table.scan()? {
            writeln!(out, "{}", item)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Writes pairs in order. Stops at the first bad token or failed write;
    /// earlier writes stay in place.
    fn set_many(&mut self, pairs: &[String]) -> Result<()> {
        for (applied, token) in pairs.iter().enumerate() {
            let written = Item::parse_pair(token).and_then(|item| self.table.put(&item));
            if let Err(e) = written {
                warn!("set aborted at {:?} after {} writes: {}", token, applied, e);
                return Err(e);
            }
        }
        debug!("set {} pairs", pairs.len());
        Ok(())
    }
}
