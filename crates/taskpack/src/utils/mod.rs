pub mod compose_config;
pub mod normalize_task;
