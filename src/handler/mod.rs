pub mod business;
pub mod communities;
pub mod jobs;
pub mod marketplace;
