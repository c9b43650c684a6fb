// Core prompt and grading exports
pub mod grading;
pub mod prompts;

pub use grading::{decode_heuristic, decode_strict, fallback_result, normalize, ParseFailure};
pub use prompts::{adaptation_prompt, grading_prompt, research_prompt, AUDIENCE_BANDS};
