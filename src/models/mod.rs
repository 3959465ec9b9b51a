mod line_item;
mod menu_item;
mod order;
mod snapshot;

pub use line_item::LineItem;
pub use menu_item::{MenuItem, FILTER_ALL};
pub use order::OrderTicket;
pub use snapshot::CartSnapshot;
