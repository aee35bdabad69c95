pub mod business_service;
pub mod community_service;
pub mod error;
pub mod form_steps;
pub mod job_service;
pub mod product_service;
pub mod profile_image;
