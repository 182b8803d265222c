pub mod mission_item;
pub mod vehicle;
