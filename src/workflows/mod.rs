pub mod catalog;
pub mod exam_finder;
pub mod predictor;
pub mod router;
pub mod scholarships;
pub mod service;

#[cfg(test)]
mod tests;

pub use router::recommendation_router;
pub use service::RecommendationService;
