use crate::token::{self, Token};

pub trait Node: ToString {
    fn token_literal(&self) -> &str;
}

#[derive(Debug, Clone)]
pub enum Statement {
    LetStmt {
        token: Token, // let token
        name: Identifier,
        value: Expression,
    },
    ReturnStmt {
        token: Token, // return token
        value: Expression,
    },
    ExpressionStmt {
        token: Token, // first token of the expression
        value: Expression,
    },
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        use Statement::*;
        match self {
            LetStmt { token, .. } => &token.literal,
            ReturnStmt { token, .. } => &token.literal,
            ExpressionStmt { token, .. } => &token.literal,
        }
    }
}

impl ToString for Statement {
    fn to_string(&self) -> String {
        use Statement::*;
        match self {
            LetStmt { name, value, .. } => {
                let mut out = String::new();
                out.push_str(self.token_literal()); // let
                out.push(' ');
                out.push_str(&name.to_string()); // identifier
                out.push_str(" = ");
                out.push_str(&value.to_string());
                out.push(';');
                out
            }
            ReturnStmt { value, .. } => {
                let mut out = String::new();
                out.push_str(self.token_literal());
                out.push(' ');
                out.push_str(&value.to_string());
                out.push(';');
                out
            }
            ExpressionStmt { value, .. } => value.to_string(),
        }
    }
}

pub struct Program {
    pub statements: Vec<Statement>,
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        if self.statements.len() > 0 {
            self.statements[0].token_literal()
        } else {
            ""
        }
    }
}

impl ToString for Program {
    fn to_string(&self) -> String {
        let mut out = String::new();
        for stmt in &self.statements {
            out.push_str(&stmt.to_string());
        }
        return out;
    }
}

#[derive(Debug, Clone)]
pub struct BlockStatement {
    pub token: Token, // the { token
    pub statements: Vec<Statement>,
}

impl Node for BlockStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl ToString for BlockStatement {
    fn to_string(&self) -> String {
        let mut out = String::new();
        for stmt in &self.statements {
            out.push_str(&stmt.to_string());
        }
        return out;
    }
}

// Expressions

#[derive(Debug, Clone)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral {
        token: Token,
        value: i64,
    },
    StringLiteral {
        token: Token,
        value: String,
    },
    Boolean {
        token: Token,
        value: bool,
    },
    PrefixExpression {
        token: Token,
        operator: String,
        right: Box<Expression>,
    },
    InfixExpression {
        token: Token,
        left: Box<Expression>,
        operator: String,
        right: Box<Expression>,
    },
    IfExpression {
        token: Token, // the if token
        condition: Box<Expression>,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    },
    FunctionLiteral {
        token: Token, // the fn token
        parameters: Vec<Identifier>,
        body: BlockStatement,
    },
    CallExpression {
        token: Token, // the ( token
        function: Box<Expression>,
        arguments: Vec<Expression>,
    },
    ArrayLiteral {
        token: Token, // the [ token
        elements: Vec<Expression>,
    },
    // entries keep source order; evaluation builds the actual map
    HashLiteral {
        token: Token, // the { token
        entries: Vec<(Expression, Expression)>,
    },
    IndexExpression {
        token: Token, // the [ token
        left: Box<Expression>,
        index: Box<Expression>,
    },
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        use Expression::*;
        match self {
            Identifier(i) => i.token_literal(),
            IntegerLiteral { token, .. } => &token.literal,
            StringLiteral { token, .. } => &token.literal,
            Boolean { token, .. } => &token.literal,
            PrefixExpression { token, .. } => &token.literal,
            InfixExpression { token, .. } => &token.literal,
            IfExpression { token, .. } => &token.literal,
            FunctionLiteral { token, .. } => &token.literal,
            CallExpression { token, .. } => &token.literal,
            ArrayLiteral { token, .. } => &token.literal,
            HashLiteral { token, .. } => &token.literal,
            IndexExpression { token, .. } => &token.literal,
        }
    }
}

impl ToString for Expression {
    fn to_string(&self) -> String {
        use Expression::*;
        match self {
            Identifier(i) => i.to_string(),
            IntegerLiteral { token, .. } => token.literal.clone(),
            StringLiteral { token, .. } => token.literal.clone(),
            Boolean { token, .. } => token.literal.clone(),
            PrefixExpression {
                operator, right, ..
            } => ["(", operator, &right.to_string(), ")"]
                .into_iter()
                .collect::<String>(),
            InfixExpression {
                left,
                operator,
                right,
                ..
            } => [
                "(",
                &left.to_string(),
                " ",
                operator,
                " ",
                &right.to_string(),
                ")",
            ]
            .into_iter()
            .collect::<String>(),
            IfExpression {
                condition,
                consequence,
                alternative,
                ..
            } => {
                let mut out = String::new();
                out.push_str("if");
                out.push_str(&condition.to_string());
                out.push(' ');
                out.push_str(&consequence.to_string());
                if let Some(alt) = alternative {
                    out.push_str("else ");
                    out.push_str(&alt.to_string());
                }
                out
            }
            FunctionLiteral {
                parameters, body, ..
            } => {
                let params = parameters
                    .iter()
                    .map(|p| p.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                ["fn(", &params, ") ", &body.to_string()]
                    .into_iter()
                    .collect::<String>()
            }
            CallExpression {
                function,
                arguments,
                ..
            } => {
                let args = arguments
                    .iter()
                    .map(|a| a.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                let mut out = String::new();
                out.push_str(&function.to_string());
                out.push('(');
                out.push_str(&args);
                out.push(')');
                out
            }
            ArrayLiteral { elements, .. } => {
                let elems = elements
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                ["[", &elems, "]"].into_iter().collect::<String>()
            }
            HashLiteral { entries, .. } => {
                let pairs = entries
                    .iter()
                    .map(|(k, v)| format!("{}:{}", k.to_string(), v.to_string()))
                    .collect::<Vec<_>>()
                    .join(", ");
                ["{", &pairs, "}"].into_iter().collect::<String>()
            }
            IndexExpression { left, index, .. } => [
                "(",
                &left.to_string(),
                "[",
                &index.to_string(),
                "])",
            ]
            .into_iter()
            .collect::<String>(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Identifier {
    pub token: token::Token, // token.IDENT token
    pub value: String,
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl ToString for Identifier {
    fn to_string(&self) -> String {
        self.value.clone()
    }
}

#[cfg(test)]
mod ast_tests {
    use super::*;
    use crate::token::TokenType;

    fn ident(name: &str) -> Identifier {
        Identifier {
            token: Token::new(TokenType::IDENT, name.into()),
            value: name.into(),
        }
    }

    #[test]
    fn test_let_statement_string() {
        let program = Program {
            statements: vec![Statement::LetStmt {
                token: Token::new(TokenType::LET, "let".into()),
                name: ident("myVar"),
                value: Expression::Identifier(ident("anotherVar")),
            }],
        };
        assert_eq!("let myVar = anotherVar;", program.to_string());
    }

    #[test]
    fn test_return_statement_string() {
        let program = Program {
            statements: vec![Statement::ReturnStmt {
                token: Token::new(TokenType::RETURN, "return".into()),
                value: Expression::IntegerLiteral {
                    token: Token::new(TokenType::INT, "5".into()),
                    value: 5,
                },
            }],
        };
        assert_eq!("return 5;", program.to_string());
    }
}
