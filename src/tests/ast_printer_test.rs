use crate::ast_printer::*;
use crate::expr::*;
use crate::scanner::*;
use crate::token::*;

fn minus() -> Token<'static> {
    Token::simple(TokenType::Minus, "-", 1)
}

fn number(x: f64) -> Expr<'static> {
    Expr::literal(Literal::Number(x))
}

#[test]
fn test_print_literals() {
    assert_eq!(print(&Expr::literal(Literal::Nil)), "nil");
    assert_eq!(print(&number(123.0)), "123");
    assert_eq!(print(&number(45.67)), "45.67");
    assert_eq!(print(&Expr::literal(Literal::String("hello world"))), "hello world");
}

#[test]
fn test_print_unary_and_grouping() {
    assert_eq!(print(&Expr::unary(minus(), number(1.0))), "(- 1)");
    assert_eq!(print(&Expr::grouping(Expr::literal(Literal::Nil))), "(group nil)");
    let bang = Token::simple(TokenType::Bang, "!", 1);
    assert_eq!(print(&Expr::unary(bang.clone(), Expr::unary(bang, Expr::literal(Literal::Nil)))),
               "(! (! nil))");
}

#[test]
fn test_print_nested() {
    // -123 * (45.67)
    let expr = Expr::binary(
        Expr::unary(minus(), number(123.0)),
        Token::simple(TokenType::Star, "*", 1),
        Expr::grouping(number(45.67)));
    assert_eq!(print(&expr), "(* (- 123) (group 45.67))");
}

#[test]
fn test_print_with_scanned_tokens() {
    let tokens = scan("1 >= \"one\"").unwrap();
    let expr = Expr::binary(Expr::literal(tokens[0].literal),
                            tokens[1].clone(),
                            Expr::literal(tokens[2].literal));
    assert_eq!(print(&expr), "(>= 1 one)");
}

// A second operation over the same tree shapes.
struct Depth;

impl<'a> Visitor<'a, usize> for Depth {
    fn visit_binary(&mut self, left: &Expr<'a>, _: &Token<'a>, right: &Expr<'a>) -> usize {
        let left_depth: usize = left.accept(&mut *self);
        let right_depth: usize = right.accept(&mut *self);

        1 + left_depth.max(right_depth)
    }

    fn visit_grouping(&mut self, inner: &Expr<'a>) -> usize {
        let depth: usize = inner.accept(&mut *self);

        1 + depth
    }

    fn visit_literal(&mut self, _: &Literal<'a>) -> usize {
        1
    }

    fn visit_unary(&mut self, _: &Token<'a>, right: &Expr<'a>) -> usize {
        let depth: usize = right.accept(&mut *self);

        1 + depth
    }
}

#[test]
fn test_custom_visitor() {
    let expr = Expr::binary(
        Expr::unary(minus(), number(123.0)),
        Token::simple(TokenType::Star, "*", 1),
        Expr::grouping(Expr::grouping(number(45.67))));
    let depth: usize = expr.accept(&mut Depth);
    assert_eq!(depth, 4);
    let depth: usize = number(1.0).accept(&mut Depth);
    assert_eq!(depth, 1);
    assert_eq!(AstPrinter.visit_grouping(&number(2.0)), "(group 2)");
}
