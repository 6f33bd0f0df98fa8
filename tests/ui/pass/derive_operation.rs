// #[derive(Operation)] satisfies the static entry point's bound.

use op_dispatch::{evaluate_static, Operation};

#[derive(Operation)]
#[operation(symbol = " min ", calculate = f64::min)]
struct Min;

fn main() {
    assert_eq!(evaluate_static(&Min, 2.0, 9.0).to_string(), "2 min 9 = 2");
}
