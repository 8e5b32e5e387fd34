//! Table storage, cell values and pagination.

mod page;
#[allow(clippy::module_inception)]
mod table;
pub(crate) mod validation;
mod value;

pub use page::TablePage;
pub use table::Table;
pub use value::Value;
