pub mod job_id;
pub mod job_stats;
pub mod overlap_policy;
pub mod resolved_paths;
pub mod task_report;
