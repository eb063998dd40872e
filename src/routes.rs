pub use errors::{
    ApiError,
    ErrorReporting,
    RouteError,
};
pub use generation::{
    generate_questions,
    generate_starter,
};
pub use health_check::health_check;
pub use lead_capture::capture_email;

mod errors;
mod generation;
mod health_check;
mod lead_capture;
