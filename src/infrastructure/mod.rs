pub mod id_generator;
pub mod memory_store;
pub mod seed;
