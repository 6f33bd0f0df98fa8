use op_dispatch::dispatch_static;

struct OnlyCalculate;

impl OnlyCalculate {
    fn calculate(&self, a: f64, b: f64) -> f64 { a - b }
}

fn main() { let _ = dispatch_static(&OnlyCalculate, OnlyCalculate.calculate(1.0, 2.0), 2.0); }
