pub mod client;
pub mod mapping;

pub use client::JiraClient;
