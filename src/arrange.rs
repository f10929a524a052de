mod column;
mod grid;
mod linear;
mod pool;
mod post;

pub mod pipeline;
pub mod strategy;
