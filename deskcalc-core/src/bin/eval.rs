extern crate deskcalc_core;

use anyhow::Context;
use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use deskcalc_core::lexer::tokenize;
use deskcalc_core::parser::Parser;

/// Evaluates an arithmetic expression.
#[derive(ClapParser)]
#[command(name = "deskcalc-eval")]
struct Args {
    /// Log every step on stderr
    #[arg(short, long)]
    verbose: bool,

    /// The expression, for example `2 + 3 * (4 - 1)`
    #[arg(required = true, allow_hyphen_values = true)]
    expr: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "deskcalc_core=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let expr = args.expr.join(" ");
    println!("Original expression: {}", expr);

    let tokens = tokenize(&expr).context("cannot read the expression")?;
    let root_node = Parser::new(&tokens)
        .parse()
        .context("cannot parse the expression")?;
    println!("Parsed expression: {}", root_node);

    let result = root_node.eval().context("cannot evaluate the expression")?;
    println!("Expression result: {}", result);

    Ok(())
}
