use std::fmt;
use std::fmt::{Display, Write};

use super::{BinOpKind, Node};

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
enum NodePriority {
    AddOrSub,
    MulOrDiv,
    Negate,
    Value,
}

fn get_node_priority(node: &Node) -> NodePriority {
    match node {
        Node::Literal(_) => NodePriority::Value,
        Node::Negate(_) => NodePriority::Negate,
        Node::Binary { op, .. } => match op {
            BinOpKind::Add | BinOpKind::Sub => NodePriority::AddOrSub,
            BinOpKind::Mul | BinOpKind::Div => NodePriority::MulOrDiv,
        },
    }
}

fn write_with_paren(
    f: &mut fmt::Formatter<'_>,
    node: &Node,
    curr_prio: NodePriority,
    left_assoc: bool,
) -> fmt::Result {
    let needs_paren = if left_assoc {
        // sub(sub(1,2),3) => 1-2-3
        get_node_priority(node) < curr_prio
    } else {
        // sub(1,sub(2,3)) => 1-(2-3), and add(1,add(2,3)) => 1+(2+3) since
        // floating point addition is not associative
        get_node_priority(node) <= curr_prio
    };
    if needs_paren {
        f.write_char('(')?;
    }
    node.fmt(f)?;
    if needs_paren {
        f.write_char(')')?;
    }
    Ok(())
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // never uses an exponent, so the lexer can read it back
            Node::Literal(val) => write!(f, "{}", val),
            Node::Negate(inner) => {
                f.write_char('-')?;
                // a negated operand is parsed as a factor, so anything
                // weaker than a negation needs parentheses
                write_with_paren(f, inner, NodePriority::Negate, true)
            }
            Node::Binary { op, left, right } => {
                let prio = get_node_priority(self);
                write_with_paren(f, left, prio, true)?;
                write!(f, " {} ", op.as_char())?;
                write_with_paren(f, right, prio, false)
            }
        }
    }
}
