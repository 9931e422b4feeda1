//! Text ↔ matrix codec over the 27-symbol alphabet.

use itertools::Itertools;

use crate::field::Matrix;
use crate::preset::encoding_table::{CHAR_TO_CODE_MAP, CODE_TO_CHAR_MAP, SPACE_CODE};

/// Encodes `text` into an `n×n` matrix of alphabet codes, laid out row-major.
///
/// The text is right-padded with spaces, or truncated, to exactly `n²` characters.
/// Any character outside the alphabet, lowercase letters included, becomes the
/// space code 27. That mapping is lossy.
///
/// # Example
///
/// ```
/// # use lu_cipher::codec::encode;
/// let m = encode("HELLO", 3);
/// assert_eq!(m, vec![vec![8, 5, 12], vec![12, 15, 27], vec![27, 27, 27]]);
/// ```
pub fn encode(text: &str, n: usize) -> Matrix {
    let codes: Vec<i64> = text
        .chars()
        .pad_using(n * n, |_| ' ')
        .take(n * n)
        .map(|ch| CHAR_TO_CODE_MAP.get(&ch).copied().unwrap_or(SPACE_CODE))
        .collect();

    codes.chunks(n.max(1)).map(|row| row.to_vec()).collect()
}

/// Decodes a matrix of alphabet codes back into text, trimming trailing spaces.
///
/// Codes outside `[1, 27]` decode to a space.
///
/// # Example
///
/// ```
/// # use lu_cipher::codec::{decode, encode};
/// assert_eq!(decode(&encode("HELLO", 3)), "HELLO");
/// ```
pub fn decode(matrix: &Matrix) -> String {
    let text: String = matrix
        .iter()
        .flatten()
        .map(|code| CODE_TO_CHAR_MAP.get(code).copied().unwrap_or(' '))
        .collect();

    text.trim_end_matches(' ').to_string()
}
