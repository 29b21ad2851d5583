// Both paths are resolved against the working directory.
pub const INPUT_FILE: &str = "village.tmx";
pub const OUTPUT_FILE: &str = "unique_tiles.txt";
