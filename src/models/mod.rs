//! Core data models for the gear tracker.

mod category;
mod gear_item;
mod goal;
mod ids;
mod pack_list;
mod stats;

pub use category::*;
pub use gear_item::*;
pub use goal::*;
pub use ids::*;
pub use pack_list::*;
pub use stats::*;
