mod display;
mod eval;

#[cfg(test)]
mod proptests;

pub use self::eval::*;

use std::ops::*;

/// A kind of operator that takes two children
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOpKind {
    pub fn as_char(self) -> char {
        match self {
            BinOpKind::Add => '+',
            BinOpKind::Sub => '-',
            BinOpKind::Mul => '*',
            BinOpKind::Div => '/',
        }
    }
}

/// A node is an operation in the AST (abstract syntax tree).
#[derive(Debug, PartialEq, Clone)]
pub enum Node {
    Literal(f64),
    Binary {
        op: BinOpKind,
        left: Box<Node>,
        right: Box<Node>,
    },
    Negate(Box<Node>),
}

impl Node {
    pub fn binary(op: BinOpKind, left: Node, right: Node) -> Node {
        Node::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Approximates the node value.
    pub fn eval(&self) -> Result<f64, EvalError> {
        eval(self)
    }
}

impl From<f64> for Node {
    fn from(val: f64) -> Node {
        Node::Literal(val)
    }
}

impl Add for Node {
    type Output = Node;

    fn add(self, rhs: Self) -> Self::Output {
        Node::binary(BinOpKind::Add, self, rhs)
    }
}

impl Sub for Node {
    type Output = Node;

    fn sub(self, rhs: Self) -> Self::Output {
        Node::binary(BinOpKind::Sub, self, rhs)
    }
}

impl Mul for Node {
    type Output = Node;

    fn mul(self, rhs: Self) -> Self::Output {
        Node::binary(BinOpKind::Mul, self, rhs)
    }
}

impl Div for Node {
    type Output = Node;

    fn div(self, rhs: Self) -> Self::Output {
        Node::binary(BinOpKind::Div, self, rhs)
    }
}

impl Neg for Node {
    type Output = Node;

    fn neg(self) -> Self::Output {
        Node::Negate(Box::new(self))
    }
}
