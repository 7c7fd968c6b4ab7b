pub mod parallelism;
pub mod path_ext;
