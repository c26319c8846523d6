/// Side length of the square board.
pub const BOARD_SIZE: i32 = 6;

/// Ship lengths placed on each board, largest first.
pub const FLEET: [i32; 7] = [3, 2, 2, 1, 1, 1, 1];
