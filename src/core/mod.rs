pub mod geometry;
pub mod lifecycle;
pub mod particles;
pub mod rng;
pub mod scheduler;
pub mod timeline;
