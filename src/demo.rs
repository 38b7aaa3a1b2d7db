//! Built-in sample expressions for exercising the optimizer end to end.

use arbor_ast::Expr;
use arbor_rewrite::Optimizer;
use tracing::info;

pub struct DemoCase {
    pub name: &'static str,
    pub input: Expr,
}

pub fn demo_cases() -> Vec<DemoCase> {
    let lit = Expr::literal;
    vec![
        DemoCase {
            name: "left-wise zero",
            input: Expr::add(lit(0), lit(1)),
        },
        DemoCase {
            name: "right-wise zero",
            input: Expr::add(lit(1), lit(0)),
        },
        DemoCase {
            name: "no zero",
            input: Expr::add(lit(2), lit(3)),
        },
        DemoCase {
            name: "both sides",
            input: Expr::add(Expr::add(lit(0), lit(1)), Expr::add(lit(1), lit(0))),
        },
    ]
}

/// One optimized sample and the values before and after.
#[derive(Debug, Clone)]
pub struct DemoOutcome {
    pub name: &'static str,
    pub input: Expr,
    pub output: Expr,
    pub input_value: u64,
    pub output_value: u64,
}

impl DemoOutcome {
    /// Whether optimization kept the value of the expression.
    pub fn preserved(&self) -> bool {
        self.input_value == self.output_value
    }
}

impl std::fmt::Display for DemoOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}: {} -> {} [{} -> {}]",
            self.name, self.input, self.output, self.input_value, self.output_value
        )
    }
}

pub fn run_demo(optimizer: &Optimizer) -> Vec<DemoOutcome> {
    demo_cases()
        .into_iter()
        .map(|case| {
            let result = optimizer.run(&case.input);
            let outcome = DemoOutcome {
                name: case.name,
                input_value: case.input.evaluate(),
                output_value: result.expr.evaluate(),
                input: case.input,
                output: result.expr,
            };
            info!(
                case = outcome.name,
                rewrites = result.rewrites.iter().sum::<usize>(),
                preserved = outcome.preserved(),
                "optimized sample"
            );
            outcome
        })
        .collect()
}
