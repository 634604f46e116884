mod client;

pub use client::ClientConfig;
