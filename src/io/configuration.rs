//! Puzzle constants and runtime configuration defaults

/// Sea monster silhouette searched for in the composite image
pub const SEA_MONSTER: &str = concat!(
    "                  # \n",
    "#    ##    ##    ###\n",
    " #  #  #  #  #  #   ",
);

/// Example puzzle used when no input file is given (3x3 tiles of 10x10 pixels)
pub const EXAMPLE_INPUT: &str = include_str!("../../data/example.txt");

// Smaller tiles have no interior left once borders are stripped
/// Minimum tile side length in pixels
pub const MIN_TILE_SIZE: usize = 3;

/// Prefix of a tile header line
pub const TILE_HEADER_PREFIX: &str = "Tile ";

// Export colours (RGBA)
/// Colour of set pixels that are not part of a pattern match
pub const SET_PIXEL_COLOR: [u8; 4] = [20, 60, 140, 255];
/// Colour of pixels covered by a pattern match
pub const PATTERN_PIXEL_COLOR: [u8; 4] = [40, 200, 90, 255];
/// Colour of unset pixels
pub const BACKGROUND_COLOR: [u8; 4] = [0, 0, 0, 0];

/// Side length in output pixels of one exported image pixel
pub const EXPORT_PIXEL_SCALE: u32 = 4;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
