use crate::expr::*;
use crate::token::*;

// Renders an expression as fully-parenthesized prefix text, e.g.
// `(* (- 123) (group 45.67))`.
pub fn print(expr: &Expr) -> String {
    expr.accept(&mut AstPrinter)
}

#[derive(Copy, Clone, Debug, Default)]
pub struct AstPrinter;

impl AstPrinter {
    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        let mut buffer = String::new();

        buffer.push('(');
        buffer.push_str(name);
        for expr in exprs {
            let rendered: String = expr.accept(&mut *self);
            buffer.push(' ');
            buffer.push_str(&rendered);
        }
        buffer.push(')');

        buffer
    }
}

impl<'a> Visitor<'a, String> for AstPrinter {
    fn visit_binary(&mut self, left: &Expr<'a>, operator: &Token<'a>, right: &Expr<'a>) -> String {
        self.parenthesize(operator.lexeme, &[left, right])
    }

    fn visit_grouping(&mut self, inner: &Expr<'a>) -> String {
        self.parenthesize("group", &[inner])
    }

    fn visit_literal(&mut self, value: &Literal<'a>) -> String {
        value.to_string()
    }

    fn visit_unary(&mut self, operator: &Token<'a>, right: &Expr<'a>) -> String {
        self.parenthesize(operator.lexeme, &[right])
    }
}
