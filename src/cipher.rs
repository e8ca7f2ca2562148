/// Lowercase English alphabet, in shift order.
const ENGLISH_LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// Uppercase English alphabet, in shift order.
const ENGLISH_UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Lowercase Russian alphabet, in shift order, including `ё`.
const RUSSIAN_LOWERCASE: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";
/// Uppercase Russian alphabet, in shift order, including `Ё`.
const RUSSIAN_UPPERCASE: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";

/// Encrypts the given text with the Caesar cipher.
///
/// Each letter is shifted `shift` positions to the right within its own
/// alphabet, wrapping around at the end; a negative shift moves left.
/// English and Russian alphabets are recognized, uppercase and lowercase
/// separately, so case and script are preserved per character. Characters
/// outside all recognized alphabets pass through unchanged.
///
/// # Parameters
/// - `text`: The text to encrypt.
/// - `shift`: The number of positions to shift each letter.
///
/// # Returns
/// The encrypted text.
///
/// # Example
/// ```
/// use ciphercalc::cipher::encrypt;
///
/// assert_eq!(encrypt("Hello, World!", 3), "Khoor, Zruog!");
/// assert_eq!(encrypt("xyz", 3), "abc");
/// assert_eq!(encrypt("абв", 1), "бвг");
/// ```
#[must_use]
pub fn encrypt(text: &str, shift: i32) -> String {
    shift_text(text, i64::from(shift))
}

/// Decrypts text that was encrypted with [`encrypt`] and the same shift.
///
/// Decryption is encryption with the shift negated, so for any text and any
/// shift, `decrypt(&encrypt(text, shift), shift)` restores the original text
/// exactly.
///
/// # Parameters
/// - `text`: The text to decrypt.
/// - `shift`: The shift value that was used for encryption.
///
/// # Returns
/// The decrypted text.
///
/// # Example
/// ```
/// use ciphercalc::cipher::{decrypt, encrypt};
///
/// assert_eq!(decrypt("Khoor, Zruog!", 3), "Hello, World!");
///
/// let round_trip = decrypt(&encrypt("Привет!", 17), 17);
/// assert_eq!(round_trip, "Привет!");
/// ```
#[must_use]
pub fn decrypt(text: &str, shift: i32) -> String {
    shift_text(text, -i64::from(shift))
}

fn shift_text(text: &str, shift: i64) -> String {
    text.chars().map(|character| shift_character(character, shift)).collect()
}

/// Shifts a single character within the alphabet that contains it, or
/// returns it unchanged if no recognized alphabet does.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_possible_wrap)]
#[allow(clippy::cast_sign_loss)]
fn shift_character(character: char, shift: i64) -> char {
    for alphabet in [ENGLISH_LOWERCASE, ENGLISH_UPPERCASE, RUSSIAN_LOWERCASE, RUSSIAN_UPPERCASE] {
        let letters: Vec<char> = alphabet.chars().collect();

        if let Some(position) = letters.iter().position(|&letter| letter == character) {
            let length = letters.len() as i64;
            let new_position = (position as i64 + shift).rem_euclid(length);
            return letters[new_position as usize];
        }
    }

    character
}
