pub mod puzzle;
pub mod sliding_moves;
pub mod sliding_tile;
