//! Expression tree shapes for a tree-building stage.
//!
//! The recognizer only validates; it never constructs these. They exist
//! so that a later semantic pass can build trees from the same token
//! stream, keyed on the operator identity carried by `Operator` tokens.

use crate::token::{Operator, Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Identifier(String),
    IntegerLiteral(i64),
    BooleanLiteral(bool),
    Binary(BinaryExpression),
    Unary(UnaryExpression),
}

/// `operand1 operator operand2`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpression {
    pub operator: Operator,
    pub operand1: Box<Expression>,
    pub operand2: Box<Expression>,
}

/// `operator operand`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnaryExpression {
    pub operator: Operator,
    pub operand: Box<Expression>,
}

impl Expression {
    #[must_use]
    pub fn binary(operator: Operator, operand1: Self, operand2: Self) -> Self {
        Self::Binary(BinaryExpression {
            operator,
            operand1: Box::new(operand1),
            operand2: Box::new(operand2),
        })
    }

    #[must_use]
    pub fn unary(operator: Operator, operand: Self) -> Self {
        Self::Unary(UnaryExpression {
            operator,
            operand: Box::new(operand),
        })
    }

    /// Leaf node for an identifier or literal token.
    ///
    /// Returns `None` for other kinds and for integer spellings that
    /// overflow `i64`.
    #[must_use]
    pub fn leaf(token: &Token) -> Option<Self> {
        match token.kind {
            TokenKind::Identifier => Some(Self::Identifier(token.text.clone())),
            TokenKind::IntegerLiteral => token.text.parse().ok().map(Self::IntegerLiteral),
            TokenKind::BooleanLiteral => Some(Self::BooleanLiteral(token.text == "true")),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::tokenize;

    #[test]
    fn leaves_from_tokens() {
        let tokens = tokenize("x 7 false ;");
        assert_eq!(
            Expression::leaf(&tokens[0]),
            Some(Expression::Identifier("x".to_string()))
        );
        assert_eq!(Expression::leaf(&tokens[1]), Some(Expression::IntegerLiteral(7)));
        assert_eq!(Expression::leaf(&tokens[2]), Some(Expression::BooleanLiteral(false)));
        assert_eq!(Expression::leaf(&tokens[3]), None);
    }

    #[test]
    fn oversized_integer_has_no_leaf() {
        let tokens = tokenize("99999999999999999999");
        assert_eq!(Expression::leaf(&tokens[0]), None);
    }

    #[test]
    fn tree_from_operator_tokens() {
        // - a + 2
        let tokens = tokenize("- a + 2");
        let neg = tokens[0].operator().expect("prefix operator");
        let plus = tokens[2].operator().expect("infix operator");
        assert!(neg.is_unary());

        let a = Expression::leaf(&tokens[1]).expect("identifier");
        let two = Expression::leaf(&tokens[3]).expect("literal");
        let tree = Expression::binary(plus, Expression::unary(neg, a), two);

        let Expression::Binary(bin) = &tree else {
            panic!("expected binary node");
        };
        assert_eq!(bin.operator, Operator::Add);
        assert!(matches!(
            bin.operand1.as_ref(),
            Expression::Unary(UnaryExpression { operator: Operator::Sub, .. })
        ));
        assert_eq!(*bin.operand2, Expression::IntegerLiteral(2));
    }
}
