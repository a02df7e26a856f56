mod mover;

pub use mover::{ArrowKeys, MoverConfig, SquareMover};
