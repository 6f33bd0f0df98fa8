use op_dispatch::Operation;

struct NoSymbol;

impl Operation for NoSymbol {
    fn calculate(&self, a: f64, b: f64) -> f64 {
        a - b
    }
}

fn main() {
    let _ = NoSymbol;
}
