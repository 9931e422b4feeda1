use lazy_static::lazy_static;
use std::collections::HashMap;

/// The 27 symbols of the alphabet, in code order starting at 1.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ ";

/// Code of the space symbol. Characters outside the alphabet are encoded with it.
pub const SPACE_CODE: i64 = 27;

lazy_static! {
    /// A static HashMap mapping an alphabet symbol to its code (A = 1 .. Z = 26, space = 27).
    pub static ref CHAR_TO_CODE_MAP: HashMap<char, i64> = ALPHABET
        .chars()
        .enumerate()
        .map(|(i, ch)| (ch, i as i64 + 1))
        .collect();

    /// A static HashMap mapping a code in [1, 27] back to its alphabet symbol.
    pub static ref CODE_TO_CHAR_MAP: HashMap<i64, char> = CHAR_TO_CODE_MAP
        .iter()
        .map(|(&ch, &code)| (code, ch))
        .collect();
}
