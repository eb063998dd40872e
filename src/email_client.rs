pub use client::EmailClient;

mod client;
mod request;
