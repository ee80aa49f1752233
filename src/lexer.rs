use std::collections::HashMap;

use crate::token::{self, Token, TokenType};

pub struct Lexer {
    chars: Vec<char>,
    keywords: HashMap<String, TokenType>,
    i: usize,
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let mut chars = input.chars().collect::<Vec<_>>();
        chars.push('\0');
        Self {
            chars,
            i: 0,
            keywords: token::get_identifier_lookup(),
        }
    }

    fn consume_whitespace(&mut self) {
        while self.chars[self.i].is_whitespace() {
            self.i += 1;
        }
    }

    fn peek(&self) -> char {
        let next = self.i + 1;
        if next >= self.chars.len() {
            '\0' // NUL as sentinel
        } else {
            self.chars[next]
        }
    }

    fn lookup_identifier(&self, s: &str) -> TokenType {
        if let Some(t) = self.keywords.get(s) {
            *t
        } else {
            TokenType::IDENT
        }
    }

    fn read_identifier(&mut self) -> String {
        assert!(is_letter(self.chars[self.i]));
        let mut identifier = String::new();
        let mut j = self.i;
        loop {
            let c = self.chars[j];
            if is_letter(c) {
                identifier.push(c);
                j += 1;
            } else {
                break;
            }
        }
        self.i = j - 1;
        return identifier;
    }

    fn read_number(&mut self) -> String {
        assert!(self.chars[self.i].is_ascii_digit());
        let mut number = String::new();
        let mut j = self.i;
        loop {
            let c = self.chars[j];
            if c.is_ascii_digit() {
                number.push(c);
                j += 1;
            } else {
                break;
            }
        }
        self.i = j - 1;
        return number;
    }

    // Consumes up to the closing quote, or up to the NUL sentinel for an
    // unterminated string. The literal excludes the quotes.
    fn read_string(&mut self) -> String {
        assert!(self.chars[self.i] == '"');
        let mut s = String::new();
        let mut j = self.i + 1;
        loop {
            let c = self.chars[j];
            if c == '"' {
                self.i = j;
                break;
            }
            if c == '\0' {
                // park before the sentinel so EOF still follows
                self.i = j - 1;
                break;
            }
            s.push(c);
            j += 1;
        }
        return s;
    }
}

impl Iterator for Lexer {
    type Item = Token;
    // next token
    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= self.chars.len() {
            return None;
        }
        self.consume_whitespace();
        let curr = self.chars[self.i];
        use TokenType::*;
        let token = match curr {
            // operators
            '=' => {
                if self.peek() == '=' {
                    self.i += 1;
                    Token::new(EQ, "==".into())
                } else {
                    Token::new(ASSIGN, curr.into())
                }
            }
            '!' => {
                if self.peek() == '=' {
                    self.i += 1;
                    Token::new(NOT_EQ, "!=".into())
                } else {
                    Token::new(BANG, curr.into())
                }
            }
            '+' => Token::new(PLUS, curr.into()),
            '-' => Token::new(MINUS, curr.into()),
            '*' => Token::new(ASTERISK, curr.into()),
            '/' => Token::new(SLASH, curr.into()),
            '<' => Token::new(LT, curr.into()),
            '>' => Token::new(GT, curr.into()),
            // delimiters
            ',' => Token::new(COMMA, curr.into()),
            ';' => Token::new(SEMICOLON, curr.into()),
            ':' => Token::new(COLON, curr.into()),
            '(' => Token::new(LPAREN, curr.into()),
            ')' => Token::new(RPAREN, curr.into()),
            '{' => Token::new(LBRACE, curr.into()),
            '}' => Token::new(RBRACE, curr.into()),
            '[' => Token::new(LBRACKET, curr.into()),
            ']' => Token::new(RBRACKET, curr.into()),
            '"' => {
                let literal = self.read_string();
                Token::new(STRING, literal)
            }
            '\0' => Token::new(EOF, "".into()),
            c => {
                if is_letter(c) {
                    let literal = self.read_identifier();
                    let token_type = self.lookup_identifier(&literal);
                    Token::new(token_type, literal)
                } else if c.is_ascii_digit() {
                    let num_str = self.read_number();
                    Token::new(INT, num_str)
                } else {
                    Token::new(ILLEGAL, c.into())
                }
            }
        };
        self.i += 1;
        return Some(token);
    }
}
