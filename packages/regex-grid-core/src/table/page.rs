//! Paged views over a table.

use serde::Serialize;

use super::{Table, Value};
use crate::error::GridError;

/// One page of rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TablePage {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
    /// Current page (1-based)
    pub page: usize,
    pub page_size: usize,
    pub total_rows: usize,
    pub total_pages: usize,
}

impl Table {
    /// Returns rows of the 1-based `page` of `page_size` rows.
    ///
    /// The last page may hold fewer rows. Fails with `PageOutOfRange` when
    /// `page` is zero, `page_size` is zero, or the page starts past the end.
    pub fn page(&self, page: usize, page_size: usize) -> Result<TablePage, GridError> {
        let total_rows = self.row_count();
        let out_of_range = || GridError::PageOutOfRange {
            page,
            page_size,
            total_rows,
        };

        if page == 0 || page_size == 0 {
            return Err(out_of_range());
        }
        let start = (page - 1).checked_mul(page_size).ok_or_else(out_of_range)?;
        if start >= total_rows {
            return Err(out_of_range());
        }
        let end = start.saturating_add(page_size).min(total_rows);

        Ok(TablePage {
            columns: self.columns().to_vec(),
            rows: self.rows()[start..end].to_vec(),
            page,
            page_size,
            total_rows,
            total_pages: total_rows.div_ceil(page_size),
        })
    }
}
