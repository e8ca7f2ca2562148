use std::io::ErrorKind;

use ciphercalc::{
    cipher,
    files::{read_from_file, write_to_file},
};
use tempfile::tempdir;

#[test]
fn write_then_read_round_trip() {
    let dir = tempdir().expect("failed to create a temporary directory");
    let path = dir.path().join("message.txt");

    let content = "Hello, Привет!\nSecond line.";
    write_to_file(&path, content).expect("write failed");

    assert_eq!(read_from_file(&path).expect("read failed"), content);
}

#[test]
fn writing_truncates_existing_content() {
    let dir = tempdir().expect("failed to create a temporary directory");
    let path = dir.path().join("message.txt");

    write_to_file(&path, "a much longer first version").expect("first write failed");
    write_to_file(&path, "short").expect("second write failed");

    assert_eq!(read_from_file(&path).expect("read failed"), "short");
}

#[test]
fn reading_a_missing_file_fails_with_not_found() {
    let dir = tempdir().expect("failed to create a temporary directory");
    let path = dir.path().join("missing.txt");

    let error = read_from_file(&path).expect_err("reading a missing file succeeded");
    assert_eq!(error.kind(), ErrorKind::NotFound);
}

// Mirrors the file-to-file cipher flow of the command line interface.
#[test]
fn encrypt_file_then_decrypt_file() {
    let dir = tempdir().expect("failed to create a temporary directory");
    let input = dir.path().join("plain.txt");
    let output = dir.path().join("secret.txt");

    let message = "Meet me at noon. Встретимся в полдень.";
    write_to_file(&input, message).expect("write failed");

    let plain = read_from_file(&input).expect("read failed");
    write_to_file(&output, &cipher::encrypt(&plain, 13)).expect("write failed");

    let secret = read_from_file(&output).expect("read failed");
    assert_ne!(secret, message);
    assert_eq!(cipher::decrypt(&secret, 13), message);
}
