pub mod cors;
pub mod preflight;

pub use cors::frontend_cors;
pub use preflight::answer_preflight;
