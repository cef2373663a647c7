//! Record types shared by save repositories.

mod save_file;

pub use save_file::{SaveFile, SaveSlotInfo};
