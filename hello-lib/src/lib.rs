pub mod export;
pub mod greeting;
pub mod testing;

pub use greeting::hello_world;
