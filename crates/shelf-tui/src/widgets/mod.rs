//! Custom widget components

mod header;
mod product_table;
mod search_bar;

pub use header::MainHeader;
pub use product_table::ProductTable;
pub use search_bar::SearchBar;
