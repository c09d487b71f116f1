pub mod entry;
pub mod palette;
pub mod schema;
pub mod widgets;
