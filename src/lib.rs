pub mod logger;
pub mod radar_pipeline;
