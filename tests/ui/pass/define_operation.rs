// define_operation! variants are ordinary operations.

use op_dispatch::{define_operation, evaluate_dynamic, evaluate_static};

define_operation!(pub div, " / ");

fn main() {
    assert_eq!(evaluate_dynamic(&Div, 9.0, 3.0).result, 3.0);
    assert_eq!(evaluate_static(&Div, 1.0, 4.0).to_string(), "1 / 4 = 0.25");
}
