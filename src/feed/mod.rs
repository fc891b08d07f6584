pub mod client;
pub mod folders;

pub use client::FeedClient;
pub use folders::{find_folder, Folder, FOLDERS};
