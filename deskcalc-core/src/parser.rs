use thiserror::Error;

use super::lexer::{Token, TokenKind};
use super::node::{BinOpKind, Node};

/// How deep parentheses and negations can be nested before the parser gives
/// up, so that the recursion stays bounded.
pub const MAX_DEPTH: usize = 256;

/// How many binary operators an expression can hold. Every operator makes the
/// tree one level deeper, so this bounds the recursion in `eval`, `Display`
/// and drop.
pub const MAX_OPERATORS: usize = 1024;

/// A parser converts a list of tokens into an AST (abstract syntax tree).
///
/// It is a recursive descent parser for this grammar:
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := factor (('*' | '/') factor)*
/// factor     := NUMBER | '(' expression ')' | '-' factor
/// ```
pub struct Parser<'a> {
    tokens: &'a [Token],
    index: usize,
    depth: usize,
    operators: usize,
}

#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum ParseError {
    #[error("empty expression")]
    EmptyExpression,
    #[error("unexpected end of expression")]
    EarlyEof,
    #[error("unexpected token at index {index}")]
    UnexpectedToken { index: usize },
    #[error("unmatched parenthesis at index {index}")]
    UnmatchedParen { index: usize },
    #[error("malformed number at index {index}")]
    MalformedNumber { index: usize },
    #[error("expression nested too deeply at index {index}")]
    TooDeep { index: usize },
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &[Token]) -> Parser<'_> {
        Parser {
            tokens,
            index: 0,
            depth: 0,
            operators: 0,
        }
    }

    fn peek_kind(&self) -> Option<&TokenKind> {
        self.tokens.get(self.index).map(|t| &t.kind)
    }

    /// Consumes the next token if it is one of the given binary operators.
    fn try_consume_op(
        &mut self,
        ops: &[(TokenKind, BinOpKind)],
    ) -> Result<Option<BinOpKind>, ParseError> {
        let tokens = self.tokens;
        let token = match tokens.get(self.index) {
            Some(val) => val,
            None => return Ok(None),
        };
        let op = match ops.iter().find(|(k, _)| *k == token.kind) {
            Some((_, op)) => *op,
            None => return Ok(None),
        };

        if self.operators >= MAX_OPERATORS {
            return Err(ParseError::TooDeep { index: token.index });
        }
        self.operators += 1;
        self.index += 1;
        Ok(Some(op))
    }

    fn enter(&mut self, index: usize) -> Result<(), ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::TooDeep { index });
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_expression(&mut self) -> Result<Node, ParseError> {
        const OPS: [(TokenKind, BinOpKind); 2] = [
            (TokenKind::Plus, BinOpKind::Add),
            (TokenKind::Minus, BinOpKind::Sub),
        ];

        // left associativity: 1-2-3 is parsed as sub(sub(1, 2), 3)
        let mut node = self.parse_term()?;
        while let Some(op) = self.try_consume_op(&OPS)? {
            let right = self.parse_term()?;
            node = Node::binary(op, node, right);
        }
        Ok(node)
    }

    fn parse_term(&mut self) -> Result<Node, ParseError> {
        const OPS: [(TokenKind, BinOpKind); 2] = [
            (TokenKind::Times, BinOpKind::Mul),
            (TokenKind::Slash, BinOpKind::Div),
        ];

        let mut node = self.parse_factor()?;
        while let Some(op) = self.try_consume_op(&OPS)? {
            let right = self.parse_factor()?;
            node = Node::binary(op, node, right);
        }
        Ok(node)
    }

    fn parse_factor(&mut self) -> Result<Node, ParseError> {
        let tokens = self.tokens;
        let token = match tokens.get(self.index) {
            Some(val) => val,
            // a dangling operator, like in `1+`
            None => return Err(ParseError::EarlyEof),
        };
        self.index += 1;

        match &token.kind {
            // too many digits overflow to infinity, which cannot be printed
            // back as a number
            TokenKind::Num(text) => text
                .parse::<f64>()
                .ok()
                .filter(|val| val.is_finite())
                .map(Node::Literal)
                .ok_or(ParseError::MalformedNumber { index: token.index }),

            // right associativity: --1 is parsed as neg(neg(1))
            TokenKind::Minus => {
                self.enter(token.index)?;
                let inner = self.parse_factor()?;
                self.depth -= 1;
                Ok(-inner)
            }

            TokenKind::OpenParen => {
                self.enter(token.index)?;
                let expr = match self.parse_expression() {
                    Ok(val) => val,
                    // `(1+2` ends inside of the parentheses
                    Err(ParseError::EarlyEof) if self.index >= self.tokens.len() => {
                        return Err(ParseError::UnmatchedParen { index: token.index })
                    }
                    Err(err) => return Err(err),
                };
                self.depth -= 1;

                if self.peek_kind() != Some(&TokenKind::CloseParen) {
                    return Err(ParseError::UnmatchedParen { index: token.index });
                }

                // consume the parenthesis
                self.index += 1;
                Ok(expr)
            }

            _ => Err(ParseError::UnexpectedToken { index: token.index }),
        }
    }

    pub fn parse(mut self) -> Result<Node, ParseError> {
        if self.tokens.is_empty() {
            return Err(ParseError::EmptyExpression);
        }

        let node = self.parse_expression()?;

        // everything must have been consumed
        match self.tokens.get(self.index) {
            None => Ok(node),
            Some(Token {
                kind: TokenKind::CloseParen,
                index,
            }) => Err(ParseError::UnmatchedParen { index: *index }),
            Some(Token { index, .. }) => Err(ParseError::UnexpectedToken { index: *index }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::lexer::tokenize;

    fn parse(expr: &str) -> Result<Node, ParseError> {
        let tokens = tokenize(expr).unwrap();
        Parser::new(&tokens).parse()
    }

    fn n(val: f64) -> Node {
        Node::Literal(val)
    }

    #[test]
    fn it_handles_precedence_correctly() {
        assert_eq!(parse("2+3*4"), Ok(n(2.0) + n(3.0) * n(4.0)));
        assert_eq!(parse("(2+3)*4"), Ok((n(2.0) + n(3.0)) * n(4.0)));
        assert_eq!(parse("8/4/2"), Ok(n(8.0) / n(4.0) / n(2.0)));
        assert_eq!(parse("1-2+3"), Ok(n(1.0) - n(2.0) + n(3.0)));
    }

    #[test]
    fn it_binds_unary_minus_tighter_than_binary_operators() {
        assert_eq!(parse("-2+3"), Ok(-n(2.0) + n(3.0)));
        assert_eq!(parse("-(2+3)"), Ok(-(n(2.0) + n(3.0))));
        assert_eq!(parse("2*-3"), Ok(n(2.0) * -n(3.0)));
        assert_eq!(parse("2--3"), Ok(n(2.0) - -n(3.0)));
        assert_eq!(parse("--3"), Ok(-(-n(3.0))));
    }

    #[test]
    fn it_reads_decimal_numbers() {
        assert_eq!(parse("0.5"), Ok(n(0.5)));
        assert_eq!(parse(".5"), Ok(n(0.5)));
        assert_eq!(parse("5."), Ok(n(5.0)));
    }

    #[test]
    fn it_rejects_malformed_expressions() {
        assert_eq!(parse(""), Err(ParseError::EmptyExpression));
        assert_eq!(parse("  "), Err(ParseError::EmptyExpression));
        assert_eq!(parse("2+"), Err(ParseError::EarlyEof));
        assert_eq!(parse("-"), Err(ParseError::EarlyEof));
        assert_eq!(parse("2+*3"), Err(ParseError::UnexpectedToken { index: 2 }));
        assert_eq!(parse("+3"), Err(ParseError::UnexpectedToken { index: 0 }));
        assert_eq!(parse("()"), Err(ParseError::UnexpectedToken { index: 1 }));
        assert_eq!(parse("2 3"), Err(ParseError::UnexpectedToken { index: 2 }));
        assert_eq!(parse("1.2.3"), Err(ParseError::UnexpectedToken { index: 3 }));
    }

    #[test]
    fn it_rejects_mismatched_parentheses() {
        assert_eq!(parse("(2+3"), Err(ParseError::UnmatchedParen { index: 0 }));
        assert_eq!(parse("((2)"), Err(ParseError::UnmatchedParen { index: 0 }));
        assert_eq!(parse("2+3)"), Err(ParseError::UnmatchedParen { index: 3 }));
        assert_eq!(parse("(2+3))"), Err(ParseError::UnmatchedParen { index: 5 }));
        assert_eq!(parse("(2 3)"), Err(ParseError::UnmatchedParen { index: 0 }));
        // the dangling operator is reported before the missing parenthesis
        assert_eq!(parse("(2+)"), Err(ParseError::UnexpectedToken { index: 3 }));
    }

    #[test]
    fn it_limits_nesting() {
        let nested = format!("{}1{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert_eq!(parse(&nested), Ok(n(1.0)));

        let too_deep = format!("{}1{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
        assert_eq!(parse(&too_deep), Err(ParseError::TooDeep { index: MAX_DEPTH }));

        let negations = format!("{}1", "-".repeat(MAX_DEPTH + 1));
        assert_eq!(parse(&negations), Err(ParseError::TooDeep { index: MAX_DEPTH }));
    }

    #[test]
    fn it_limits_operator_chains() {
        let longest = vec!["1"; MAX_OPERATORS + 1].join("*");
        assert!(parse(&longest).is_ok());

        // `1+1+...`: the operator number n sits at byte index 2n - 1
        let too_long = vec!["1"; 100_000].join("+");
        assert_eq!(
            parse(&too_long),
            Err(ParseError::TooDeep {
                index: 2 * MAX_OPERATORS + 1
            })
        );

        // the budget is shared by both precedence levels and parentheses
        let mixed = vec!["(1-2*3)"; 50_000].join("/");
        assert!(matches!(parse(&mixed), Err(ParseError::TooDeep { .. })));
    }

    #[test]
    fn it_rejects_numbers_too_large_for_a_float() {
        let huge = format!("1{}", "0".repeat(400));
        assert_eq!(parse(&huge), Err(ParseError::MalformedNumber { index: 0 }));
        assert_eq!(
            parse(&format!("2+{}", huge)),
            Err(ParseError::MalformedNumber { index: 2 })
        );

        // the largest float still reads
        let max = format!("{}", f64::MAX);
        assert_eq!(parse(&max), Ok(n(f64::MAX)));
    }
}
