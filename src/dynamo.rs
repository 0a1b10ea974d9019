//! DynamoDB-backed `Table`.
//!
//! The SDK is async, so the table owns a single-threaded tokio runtime and
//! blocks on each request. Requests go out one at a time.

use std::collections::HashMap;

use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use log::{debug, warn};
use tokio::runtime::{Builder, Runtime};

use crate::error::{KvError, Result};
use crate::item::{Item, NAME_ATTR, VALUE_ATTR};
use crate::store::Table;

pub struct DynamoTable {
    runtime: Runtime,
    client: Client,
    table: String,
}

impl DynamoTable {
    /// Builds a client for `table` in `region`.
    ///
    /// Credentials are resolved by the SDK's default chain; nothing is sent
    /// until the first request.
    pub fn connect(region: &str, table: impl Into<String>) -> Result<DynamoTable> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        let sdk_config = runtime.block_on(
            aws_config::defaults(BehaviorVersion::latest())
                .region(Region::new(region.to_string()))
                .load(),
        );

        Ok(DynamoTable {
            runtime,
            client: Client::new(&sdk_config),
            table: table.into(),
        })
    }
}

impl Table for DynamoTable {
    fn scan(&mut self) -> Result<Vec<Item>> {
        debug!("scan table={}", self.table);
        let output = self
            .runtime
            .block_on(self.client.scan().table_name(&self.table).send())
            .map_err(storage_error)?;

        debug!("scan table={} returned {} items", self.table, output.items().len());
        output.items().iter().map(item_from_attributes).collect()
    }

    fn put(&mut self, item: &Item) -> Result<()> {
        debug!("put table={} key={}", self.table, item.name);
        self.runtime
            .block_on(
                self.client
                    .put_item()
                    .table_name(&self.table)
                    .item(NAME_ATTR, AttributeValue::S(item.name.clone()))
                    .item(VALUE_ATTR, AttributeValue::S(item.value.clone()))
                    .send(),
            )
            .map_err(storage_error)?;
        Ok(())
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        debug!("delete table={} key={}", self.table, name);
        self.runtime
            .block_on(
                self.client
                    .delete_item()
                    .table_name(&self.table)
                    .key(NAME_ATTR, AttributeValue::S(name.to_string()))
                    .send(),
            )
            .map_err(storage_error)?;
        Ok(())
    }
}

fn storage_error<E: std::error::Error>(err: E) -> KvError {
    let message = DisplayErrorContext(&err).to_string();
    warn!("dynamodb request failed: {}", message);
    KvError::Storage(message)
}

fn item_from_attributes(attrs: &HashMap<String, AttributeValue>) -> Result<Item> {
    Ok(Item {
        name: string_attr(attrs, NAME_ATTR)?,
        value: string_attr(attrs, VALUE_ATTR)?,
    })
}

fn string_attr(attrs: &HashMap<String, AttributeValue>, key: &str) -> Result<String> {
    attrs
        .get(key)
        .and_then(|v| v.as_s().ok())
        .cloned()
        .ok_or_else(|| KvError::MalformedItem(format!("missing string attribute {}", key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, AttributeValue)]) -> HashMap<String, AttributeValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn reads_name_and_value() {
        let raw = attrs(&[
            ("Name", AttributeValue::S("k".into())),
            ("Value", AttributeValue::S("a=b".into())),
        ]);
        assert_eq!(item_from_attributes(&raw).unwrap(), Item::new("k", "a=b"));
    }

    #[test]
    fn extra_attributes_are_ignored() {
        let raw = attrs(&[
            ("Name", AttributeValue::S("k".into())),
            ("Value", AttributeValue::S("".into())),
            ("Ttl", AttributeValue::N("42".into())),
        ]);
        assert_eq!(item_from_attributes(&raw).unwrap(), Item::new("k", ""));
    }

    #[test]
    fn missing_value_is_malformed() {
        let raw = attrs(&[("Name", AttributeValue::S("k".into()))]);
        assert!(matches!(
            item_from_attributes(&raw),
            Err(KvError::MalformedItem(_))
        ));
    }

    #[test]
    fn non_string_name_is_malformed() {
        let raw = attrs(&[
            ("Name", AttributeValue::N("1".into())),
            ("Value", AttributeValue::S("v".into())),
        ]);
        assert!(matches!(
            item_from_attributes(&raw),
            Err(KvError::MalformedItem(_))
        ));
    }
}
