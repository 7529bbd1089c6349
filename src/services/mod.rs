pub mod encoding;
pub mod escape;
pub mod fetch;
pub mod fragment;
pub mod links;
pub mod media;
pub mod nav;
pub mod page;
pub mod populate;
pub mod rich_text;
pub mod shows;
