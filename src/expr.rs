use crate::token::*;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr<'a> {
    Binary(Box<Expr<'a>>, Token<'a>, Box<Expr<'a>>),
    Grouping(Box<Expr<'a>>),
    Literal(Literal<'a>),
    Unary(Token<'a>, Box<Expr<'a>>),
}

// One operation over expression trees.  Each method receives the parts of the
// node shape it's named for.
pub trait Visitor<'a, T> {
    fn visit_binary(&mut self, left: &Expr<'a>, operator: &Token<'a>, right: &Expr<'a>) -> T;
    fn visit_grouping(&mut self, inner: &Expr<'a>) -> T;
    fn visit_literal(&mut self, value: &Literal<'a>) -> T;
    fn visit_unary(&mut self, operator: &Token<'a>, right: &Expr<'a>) -> T;
}

impl<'a> Expr<'a> {
    pub fn binary(left: Expr<'a>, operator: Token<'a>, right: Expr<'a>) -> Expr<'a> {
        Expr::Binary(Box::new(left), operator, Box::new(right))
    }

    pub fn grouping(inner: Expr<'a>) -> Expr<'a> {
        Expr::Grouping(Box::new(inner))
    }

    pub fn literal(value: Literal<'a>) -> Expr<'a> {
        Expr::Literal(value)
    }

    pub fn unary(operator: Token<'a>, right: Expr<'a>) -> Expr<'a> {
        Expr::Unary(operator, Box::new(right))
    }

    pub fn accept<T, V>(&self, visitor: &mut V) -> T
        where V: Visitor<'a, T> + ?Sized
    {
        match self {
            Expr::Binary(left, operator, right) => visitor.visit_binary(left, operator, right),
            Expr::Grouping(inner) => visitor.visit_grouping(inner),
            Expr::Literal(value) => visitor.visit_literal(value),
            Expr::Unary(operator, right) => visitor.visit_unary(operator, right),
        }
    }
}
