//! Validation Chain Example
//!
//! Walks through typical form-field checks built with `Validator` chains.
//!
//! Run with: cargo run --example chain_demo
//! With engine logging: cargo run --example chain_demo --features tracing

use tributary::prelude::*;
use tributary::byte_length;

fn main() -> Result<(), CheckError> {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Validation Chain Example ===\n");

    null_checks()?;
    korean_text()?;
    phone_numbers()?;
    spaces_and_email()?;
    numbers()?;
    extensions()?;
    errors();

    println!("\nbyte_length(\"test하하\") = {}", byte_length("test하하"));
    Ok(())
}

/// Presence checks and reusing a session
fn null_checks() -> Result<(), CheckError> {
    println!("--- Null checks ---");
    let v = Validator::new(None::<&str>).is_null_like()?;
    println!("  null is null-like: {}", v.check()?); // true
    let v = v.set_subject(10).is_null_like()?;
    println!("  10 is null-like: {}", v.check()?); // false
    Ok(())
}

fn korean_text() -> Result<(), CheckError> {
    println!("\n--- Korean alphanumeric ---");
    let ok = Validator::new("hello 안녕하세요ㅇㅗㅎ")
        .is_korean_alphanumeric()?
        .is_length_between(10, 20)?
        .check()?;
    println!("  mixed Korean/English text: {}", ok);
    Ok(())
}

fn phone_numbers() -> Result<(), CheckError> {
    println!("\n--- Phone numbers ---");
    for (phone, format) in [
        ("asdasd asdasd", "xxx-xxxx-xxxx"),
        ("010-1111-1111", "xxx-xxxx-xxxx"),
        ("999-1111-1111", "010-xxxx-xxxx"),
    ] {
        let ok = Validator::new(phone).is_valid_phone_no(format)?.check()?;
        println!("  {} as {}: {}", phone, format, ok);
    }
    Ok(())
}

fn spaces_and_email() -> Result<(), CheckError> {
    println!("\n--- Spaces and email ---");
    let v = Validator::new("asdasd asdasd").has_spaces()?;
    println!("  has space: {}", v.check()?); // true

    let v = v
        .set_subject("asdasdasdasdasd")
        .and()
        .has_spaces()?
        .or()
        .is_valid_email_address()?;
    println!("  has space or valid email: {}", v.check()?); // false

    let v = Validator::new("test.jpg").is_valid_email_address()?;
    println!("  test.jpg is an email: {}", v.check()?); // false
    let v = v.set_subject("ljay189@gmail.com").or().is_valid_email_address()?;
    println!("  ljay189@gmail.com is an email: {}", v.check()?); // true
    Ok(())
}

fn numbers() -> Result<(), CheckError> {
    println!("\n--- Numbers ---");
    let ok = Validator::new(100)
        .is_between(80.0, 120.0)?
        .or()
        .less_than(130.0)?
        .check()?;
    println!("  100 between 80 and 120 (or below 130): {}", ok);
    Ok(())
}

fn extensions() -> Result<(), CheckError> {
    println!("\n--- Extensions ---");
    let ok = Validator::new("test.jpg")
        .is_valid_extension("jpg|test|png")?
        .check()?;
    println!("  test.jpg is an image: {}", ok);
    Ok(())
}

/// Errors abort the chain and describe the offending value
fn errors() {
    println!("\n--- Errors ---");
    if let Err(e) = Validator::new(3).has_spaces() {
        println!("  {}", e);
    }
    if let Err(e) = Validator::new("x").check() {
        println!("  {}", e);
    }
}
