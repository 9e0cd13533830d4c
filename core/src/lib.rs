pub mod shortcuts;

mod filesystem;
mod utils;
