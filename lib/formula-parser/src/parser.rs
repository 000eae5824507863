use log::debug;

use crate::error::{Result, TrailingInputSnafu, UnexpectedEndSnafu, UnexpectedTokenSnafu};
use crate::expr::Expr;
use crate::token::{tokenize, Token};

const PRIMARY: &str = "a variable, '~' or '('";

/// Parses a formula over `~`, `&`, `|`, `->`, `<->`, parentheses and
/// one-character variables. Precedence, lowest to highest:
/// `<->` < `->` < `|` < `&` < `~`. All binary operators associate to the left.
pub fn parse_expr(input: &str) -> Result<Expr> {
    let tokens = tokenize(input);
    let mut parser = Parser::new(tokens);
    let expr = parser.parse_iff()?;
    if let Some(token) = parser.peek() {
        return TrailingInputSnafu { found: token }.fail();
    }
    debug!("parse_expr({:?}) = {}", input, expr);
    Ok(expr)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, expected: Token, description: &'static str) -> Result<()> {
        match self.advance() {
            Some(token) if token == expected => Ok(()),
            Some(token) => UnexpectedTokenSnafu {
                expected: description,
                found: token,
            }
            .fail(),
            None => UnexpectedEndSnafu { expected: description }.fail(),
        }
    }

    fn parse_iff(&mut self) -> Result<Expr> {
        let mut expr = self.parse_implies()?;
        while self.peek() == Some(Token::Iff) {
            self.advance();
            let rhs = self.parse_implies()?;
            expr = Expr::iff(expr, rhs);
        }
        Ok(expr)
    }

    fn parse_implies(&mut self) -> Result<Expr> {
        let mut expr = self.parse_or()?;
        while self.peek() == Some(Token::Implies) {
            self.advance();
            let rhs = self.parse_or()?;
            expr = Expr::implies(expr, rhs);
        }
        Ok(expr)
    }

    fn parse_or(&mut self) -> Result<Expr> {
        let mut expr = self.parse_and()?;
        while self.peek() == Some(Token::Or) {
            self.advance();
            let rhs = self.parse_and()?;
            expr = Expr::or(expr, rhs);
        }
        Ok(expr)
    }

    fn parse_and(&mut self) -> Result<Expr> {
        let mut expr = self.parse_unary()?;
        while self.peek() == Some(Token::And) {
            self.advance();
            let rhs = self.parse_unary()?;
            expr = Expr::and(expr, rhs);
        }
        Ok(expr)
    }

    fn parse_unary(&mut self) -> Result<Expr> {
        match self.advance() {
            Some(Token::Not) => {
                let arg = self.parse_unary()?;
                Ok(Expr::not(arg))
            }
            Some(Token::LParen) => {
                let expr = self.parse_iff()?;
                self.expect(Token::RParen, "')'")?;
                Ok(expr)
            }
            Some(Token::Var(c)) => Ok(Expr::Var(c.into())),
            Some(token) => UnexpectedTokenSnafu {
                expected: PRIMARY,
                found: token,
            }
            .fail(),
            None => UnexpectedEndSnafu { expected: PRIMARY }.fail(),
        }
    }
}
