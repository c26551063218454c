// Domain layer - sensor readings and the AQI predictor
pub mod predictor;
pub mod reading;
