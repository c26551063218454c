// Application layer - services and repository traits
pub mod dataset_repository;
pub mod dataset_service;
pub mod history_repository;
pub mod history_service;
pub mod prediction_service;
