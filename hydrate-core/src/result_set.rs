use crate::{Result, Value};
use std::{collections::VecDeque, sync::Arc};

/// Shared reference-counted column name list.
pub type RowNames = Arc<[String]>;
/// Owned row value slice matching `RowNames` length.
pub type Row = Box<[Value]>;

/// A result row with its corresponding column labels.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct RowLabeled {
    /// Column names.
    pub labels: RowNames,
    /// Data values (aligned by index with `labels`).
    pub values: Row,
}

impl RowLabeled {
    pub fn new(names: RowNames, values: Row) -> Self {
        Self {
            labels: names,
            values,
        }
    }
    pub fn names(&self) -> &[String] {
        &self.labels
    }
    pub fn values(&self) -> &[Value] {
        &self.values
    }
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
    pub fn get_column(&self, name: &str) -> Option<&Value> {
        self.labels
            .iter()
            .position(|v| v == name)
            .map(|i| &self.values()[i])
    }
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }
}

impl<S: Into<String>> FromIterator<(S, Value)> for RowLabeled {
    fn from_iter<T: IntoIterator<Item = (S, Value)>>(iter: T) -> Self {
        let (labels, values): (Vec<String>, Vec<Value>) =
            iter.into_iter().map(|(k, v)| (k.into(), v)).unzip();
        Self::new(labels.into(), values.into())
    }
}

impl From<RowLabeled> for Row {
    fn from(value: RowLabeled) -> Self {
        value.values
    }
}

/// Query result handed over by the query execution layer.
///
/// Both fetch methods yield the same rows, `iterate` is the one used when the
/// result is expected to be too large to be held in memory at once.
pub trait ResultSet {
    /// Number of rows the result reports, used to pick the fetch strategy.
    fn row_count(&mut self) -> Result<u64>;

    /// Fetch every row eagerly.
    fn fetch_all(&mut self) -> Result<Vec<RowLabeled>>;

    /// Lazily iterate the rows, one in flight at a time.
    fn iterate(&mut self) -> impl Iterator<Item = Result<RowLabeled>>;
}

/// In memory [`ResultSet`], it also counts how it was consumed.
#[derive(Default, Debug, Clone)]
pub struct RowsResult {
    rows: VecDeque<RowLabeled>,
    reported_count: Option<u64>,
    row_count_calls: usize,
    fetch_all_calls: usize,
    iterate_calls: usize,
    rows_yielded: usize,
}

impl RowsResult {
    pub fn new(rows: impl IntoIterator<Item = RowLabeled>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
            ..Default::default()
        }
    }
    /// Makes `row_count` report `count` regardless of the rows held.
    pub fn reporting(mut self, count: u64) -> Self {
        self.reported_count = Some(count);
        self
    }
    pub fn row_count_calls(&self) -> usize {
        self.row_count_calls
    }
    pub fn fetch_all_calls(&self) -> usize {
        self.fetch_all_calls
    }
    pub fn iterate_calls(&self) -> usize {
        self.iterate_calls
    }
    /// Rows handed out so far, through either fetch method.
    pub fn rows_yielded(&self) -> usize {
        self.rows_yielded
    }
}

impl ResultSet for RowsResult {
    fn row_count(&mut self) -> Result<u64> {
        self.row_count_calls += 1;
        Ok(self.reported_count.unwrap_or(self.rows.len() as u64))
    }

    fn fetch_all(&mut self) -> Result<Vec<RowLabeled>> {
        self.fetch_all_calls += 1;
        self.rows_yielded += self.rows.len();
        Ok(self.rows.drain(..).collect())
    }

    fn iterate(&mut self) -> impl Iterator<Item = Result<RowLabeled>> {
        self.iterate_calls += 1;
        std::iter::from_fn(move || {
            let row = self.rows.pop_front()?;
            self.rows_yielded += 1;
            Some(Ok(row))
        })
    }
}
