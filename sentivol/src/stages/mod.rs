//! Pipeline stages, each a method on [`crate::Sentivol`] that fully
//! materializes its output before the next one starts.
mod analysis;
mod news;
mod prices;
mod run;
