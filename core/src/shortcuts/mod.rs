pub mod error;
mod extras;
mod header;
mod idlist;
mod location;
mod network;
pub mod parser;
mod shortcut;
mod strings;
mod volume;
