//! Property-based tests for the expression engine

use proptest::prelude::*;

use super::*;
use crate::evaluate;
use crate::lexer::tokenize;
use crate::parser::Parser;

fn arb_op() -> impl Strategy<Value = BinOpKind> {
    prop_oneof![
        Just(BinOpKind::Add),
        Just(BinOpKind::Sub),
        Just(BinOpKind::Mul),
        Just(BinOpKind::Div),
    ]
}

fn arb_literal() -> impl Strategy<Value = Node> {
    prop_oneof![
        (0u32..1000).prop_map(|n| Node::Literal(f64::from(n))),
        (0.0f64..1e6).prop_map(Node::Literal),
    ]
}

fn arb_node() -> impl Strategy<Value = Node> {
    arb_literal().prop_recursive(6, 64, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|n| -n),
            (arb_op(), inner.clone(), inner).prop_map(|(op, l, r)| Node::binary(op, l, r)),
        ]
    })
}

proptest! {
    #[test]
    fn formatted_trees_parse_back_to_the_same_tree(node in arb_node()) {
        let formatted = node.to_string();
        let tokens = tokenize(&formatted).unwrap();
        let parsed = Parser::new(&tokens).parse().unwrap();
        prop_assert_eq!(&parsed, &node);
    }

    #[test]
    fn evaluation_matches_the_tree(node in arb_node()) {
        let direct = node.eval();
        let from_text = evaluate(&node.to_string());
        match (direct, from_text) {
            (Ok(a), Ok(b)) => prop_assert!(a == b || (a.is_nan() && b.is_nan())),
            (Err(a), Err(b)) => prop_assert_eq!(crate::EngineError::Eval(a), b),
            (a, b) => prop_assert!(false, "{:?} != {:?}", a, b),
        }
    }

    #[test]
    fn the_lexer_never_panics(text in "[0-9.+*/() \\-a-z]{0,40}") {
        let _ = evaluate(&text);
    }
}
