pub mod items;
pub mod messages;
