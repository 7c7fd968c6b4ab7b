pub mod overlap_policy;
