pub use client::LlmClient;
pub use normalize::{
    strip_code_fences,
    strip_wrapping_quotes,
};

mod client;
mod normalize;
mod request;
