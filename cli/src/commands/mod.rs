pub mod evaluate;
pub mod play;
pub mod select;
pub mod simulate;
