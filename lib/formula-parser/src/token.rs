use std::fmt::{Display, Formatter};

use itertools::Itertools;
use log::debug;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Token {
    Var(char),
    Not,
    And,
    Or,
    Implies,
    Iff,
    LParen,
    RParen,
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Var(c) => write!(f, "{c}"),
            Token::Not => write!(f, "~"),
            Token::And => write!(f, "&"),
            Token::Or => write!(f, "|"),
            Token::Implies => write!(f, "->"),
            Token::Iff => write!(f, "<->"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

/// Splits the input into tokens, skipping whitespace.
///
/// The scanner never fails: any character that is not an operator or a
/// parenthesis becomes a one-character [`Token::Var`] fragment. Adjacent
/// fragments are never merged, so identifiers are exactly one character long.
pub fn tokenize(input: &str) -> Vec<Token> {
    let chars = input.chars().collect::<Vec<_>>();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
            continue;
        }
        // `<->` must be checked before `->`.
        if c == '<' && chars.get(i + 1) == Some(&'-') && chars.get(i + 2) == Some(&'>') {
            tokens.push(Token::Iff);
            i += 3;
            continue;
        }
        if c == '-' && chars.get(i + 1) == Some(&'>') {
            tokens.push(Token::Implies);
            i += 2;
            continue;
        }
        let token = match c {
            '(' => Token::LParen,
            ')' => Token::RParen,
            '~' => Token::Not,
            '&' => Token::And,
            '|' => Token::Or,
            _ => Token::Var(c),
        };
        tokens.push(token);
        i += 1;
    }
    debug!("tokenize({:?}) = [{}]", input, tokens.iter().join(" "));
    tokens
}
