extern crate deskcalc_core;

use clap::Parser;
use rand::prelude::*;
use rand::rngs::StdRng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use deskcalc_core::calculator::{CalculatorState, Input, ERROR_DISPLAY, HISTORY_CAPACITY};
use deskcalc_core::keymap::parse_key;
use deskcalc_core::node::{BinOpKind, Node};
use deskcalc_core::{evaluate, EngineError};

/// Throws random expressions and key presses at the calculator.
#[derive(Parser)]
#[command(name = "fuzzy-test")]
struct Args {
    /// How many expressions and key sequences to try
    #[arg(short, long, default_value_t = 5000)]
    iterations: u32,

    /// Seed of the random number generator, random by default
    #[arg(short, long)]
    seed: Option<u64>,
}

const KEYS: [&str; 31] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "×", "÷", "(", ")", "=",
    "C", "Escape", "sin", "cos", "tan", "log", "ln", "sqrt", "MC", "MR", "M+", "M-", "MS",
];

fn random_num(rng: &mut StdRng) -> f64 {
    match rng.gen_range(0..10) {
        0 => 0.0,
        1 => 1.0,
        // decimals
        2..=4 => rng.gen_range(0.0..1000.0),
        _ => f64::from(rng.gen_range(0..100)),
    }
}

fn random_node(rng: &mut StdRng, depth: u32) -> Node {
    // limit the amount of node depth
    if depth < 6 && rng.gen_range(0..10) > 2 {
        // pick a composite node
        match rng.gen_range(0..5) {
            0 => return -random_node(rng, depth + 1),
            n => {
                let op = match n {
                    1 => BinOpKind::Add,
                    2 => BinOpKind::Sub,
                    3 => BinOpKind::Mul,
                    _ => BinOpKind::Div,
                };
                let left = random_node(rng, depth + 1);
                let right = random_node(rng, depth + 1);
                return Node::binary(op, left, right);
            }
        }
    }
    // pick leaf node
    Node::Literal(random_num(rng))
}

fn test_expression(rng: &mut StdRng) {
    let node = random_node(rng, 0);
    let text = node.to_string();
    debug!(%text, "testing expression");

    match (node.eval(), evaluate(&text)) {
        (Ok(ground_truth), Ok(result)) => {
            assert!(
                ground_truth == result || (ground_truth.is_nan() && result.is_nan()),
                "{} evaluated to {} instead of {}",
                text,
                result,
                ground_truth
            );
        }
        (Err(err), Err(result)) => {
            assert_eq!(result, EngineError::Eval(err), "{} failed differently", text);
        }
        (ground_truth, result) => {
            panic!("{}: {:?} versus {:?}", text, ground_truth, result);
        }
    }
}

fn test_key_sequence(rng: &mut StdRng) {
    let len = rng.gen_range(1..64);
    let mut keys = Vec::with_capacity(len);
    let mut state = CalculatorState::new();

    for _ in 0..len {
        let key = *KEYS.choose(rng).unwrap();
        keys.push(key);
        let input: Input = parse_key(key).unwrap();
        state = state.apply(input);

        let valid_display = state.display() == ERROR_DISPLAY
            || state.display_value().map_or(false, f64::is_finite);
        assert!(valid_display, "keys {:?} displayed {:?}", keys, state.display());
        assert!(state.memory().is_finite(), "keys {:?}", keys);
        assert!(state.history().len() <= HISTORY_CAPACITY, "keys {:?}", keys);
    }
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(|| thread_rng().gen());
    info!(seed, iterations = args.iterations, "starting");
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..args.iterations {
        test_expression(&mut rng);
        test_key_sequence(&mut rng);
    }

    info!("no mismatch found");
}
