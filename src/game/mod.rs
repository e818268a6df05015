// Game rules: level collision data and the characters walking it

pub mod characters;
pub mod constants;
pub mod level;
