// Application layer - Plan shaping stages and use-case services
pub mod browser;
pub mod distribution;
pub mod filter_engine;
pub mod insights_service;
pub mod normalizer;
pub mod plan_repository;
pub mod plan_service;
pub mod selection;
pub mod sort_engine;
pub mod trend;
