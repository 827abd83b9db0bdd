use crate::error::*;
use crate::source_loc::*;
use crate::token::*;

#[test]
fn test_token_type_names() {
    assert_eq!(TokenType::LeftParen.to_string(), "LEFT_PAREN");
    assert_eq!(TokenType::BangEqual.to_string(), "BANG_EQUAL");
    assert_eq!(TokenType::Identifier.to_string(), "IDENTIFIER");
    assert_eq!(TokenType::While.to_string(), "WHILE");
    assert_eq!(TokenType::Eof.to_string(), "EOF");
}

#[test]
fn test_token_display() {
    let number = Token::new(TokenType::Number, "1.50", Literal::Number(1.5), 1, 1);
    assert_eq!(number.to_string(), "NUMBER 1.50 1.5");

    let string = Token::new(TokenType::String, "\"hi\"", Literal::String("hi"), 2, 4);
    assert_eq!(string.to_string(), "STRING \"hi\" hi");

    assert_eq!(Token::simple(TokenType::Eof, "", 3).to_string(), "EOF  nil");
}

#[test]
fn test_literal_display() {
    assert_eq!(Literal::Nil.to_string(), "nil");
    assert_eq!(Literal::String("a b").to_string(), "a b");
    assert_eq!(Literal::Number(123.0).to_string(), "123");
    assert_eq!(Literal::Number(0.25).to_string(), "0.25");
}

#[test]
fn test_source_loc_from_token() {
    let token = Token::new(TokenType::Identifier, "x", Literal::Nil, 4, 9);
    assert_eq!(SourceLoc::from(&token), SourceLoc::new(4, 9));
    assert_eq!(SourceLoc::new(4, 9).to_string(), "4:9");
}

#[test]
fn test_scan_error_display() {
    let cause = ScanErrorCause::new(SourceLoc::new(3, 1), ScanErrorKind::UnterminatedString);
    assert_eq!(cause.to_string(), "[line 3] Error: Unterminated string.");

    let error = ScanError::new(vec![
        ScanErrorCause::new(SourceLoc::new(1, 2), ScanErrorKind::UnexpectedCharacter("@".into())),
        cause,
    ]);
    assert_eq!(error.to_string(), "Unexpected character: @");
    assert_eq!(error.source_loc(), SourceLoc::new(1, 2));

    assert_eq!(ScanError::new(vec![]).message(), "unknown cause");
    assert_eq!(ScanError::new(vec![]).source_loc(), SourceLoc::default());
}
