pub mod news;
pub mod prices;
