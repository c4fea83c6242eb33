//! Basic usage example for the dragoncrypt authenticated stream cipher.

use dragoncrypt::{decrypt, encrypt, Error, TAG_SIZE};

fn main() -> Result<(), Error> {
    println!("dragoncrypt Basic Usage Example");
    println!("===============================");

    basic_example()?;
    size_examples()?;
    error_handling_example()?;

    Ok(())
}

fn basic_example() -> Result<(), Error> {
    println!("\n1. Basic Encryption/Decryption:");

    let key = 0x0123_4567_89AB_CDEFu64;
    let iv_len = 12;
    let plaintext = b"Hello, dragoncrypt! This is a secret message.";

    let ciphertext = encrypt(plaintext, key, iv_len)?;
    println!("  Plaintext: {:?}", String::from_utf8_lossy(plaintext));
    println!(
        "  Ciphertext: {} bytes ({} IV + {} message + {} trailer)",
        ciphertext.len(),
        iv_len,
        plaintext.len(),
        TAG_SIZE
    );

    let decrypted = decrypt(&ciphertext, key, iv_len)?;
    println!("  Decrypted: {:?}", String::from_utf8_lossy(&decrypted));

    assert_eq!(decrypted, plaintext);
    println!("  Encryption/decryption successful!");

    Ok(())
}

fn size_examples() -> Result<(), Error> {
    println!("\n2. Different Input Sizes:");

    let key = 0xFEED_FACE_1234_5678u64;
    let iv_len = 16;

    for size in [0, 1, 64, 4096] {
        let plaintext = vec![0xAB; size];
        let ciphertext = encrypt(&plaintext, key, iv_len)?;
        let decrypted = decrypt(&ciphertext, key, iv_len)?;

        assert_eq!(decrypted, plaintext);
        println!(
            "  {} byte message -> {} byte ciphertext",
            size,
            ciphertext.len()
        );
    }

    Ok(())
}

fn error_handling_example() -> Result<(), Error> {
    println!("\n3. Error Handling:");

    let key = 42u64;
    let iv_len = 12;
    let mut ciphertext = encrypt(b"tamper with me", key, iv_len)?;

    // Flip one bit in the trailer
    let last = ciphertext.len() - 1;
    ciphertext[last] ^= 0x01;
    match decrypt(&ciphertext, key, iv_len) {
        Err(Error::AuthenticationFailed) => println!("  Tampering detected, as expected"),
        other => panic!("expected authentication failure, got {other:?}"),
    }

    // Ciphertext shorter than the minimum framing size
    match decrypt(&[0u8; 4], key, iv_len) {
        Err(Error::CiphertextTooShort) => println!("  Truncated input rejected, as expected"),
        other => panic!("expected malformed-input rejection, got {other:?}"),
    }

    Ok(())
}
