pub fn error(line: u32, message: &str) {
    println!("[line {}] Error: {}", line, message);
}

pub fn is_digit(c: char) -> bool {
    // Note: built-in is_numeric() uses a more complicated unicode definition of
    // numeric.
    c.is_ascii_digit()
}

pub fn is_alphabetic(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

pub fn is_alphanumeric(grapheme: &str) -> bool {
    // Only look at the first base character.
    match grapheme.chars().next() {
        None => false,
        Some(c) => c.is_alphanumeric() || c == '_',
    }
}
