pub mod entry;
pub mod media;
pub mod section;
