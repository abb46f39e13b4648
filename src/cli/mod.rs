pub mod list;
pub mod price;
pub mod setup;
pub mod ui;
