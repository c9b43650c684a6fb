// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::QuizResult;
pub use requests::{AuthRequest, QuizRequest, SummaryRequest};
pub use responses::{AuthResponse, ErrorResponse, HealthResponse, RootResponse, SummaryResponse};
