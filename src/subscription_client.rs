pub use client::SubscriptionClient;

mod client;
mod request;
