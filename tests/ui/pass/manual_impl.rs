// A hand-written impl satisfies both entry points.

use op_dispatch::{dispatch_dynamic_to, dispatch_static_to, Operation};

struct Sub;

impl Operation for Sub {
    fn calculate(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    fn symbol(&self) -> &str {
        " - "
    }
}

fn main() {
    let mut out: Vec<u8> = Vec::new();
    dispatch_dynamic_to(&mut out, &Sub, 5.0, 3.0).unwrap();
    dispatch_static_to(&mut out, &Sub, 5.0, 3.0).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Dynamic dispatch: 5 - 3 = 2\nStatic dispatch: 5 - 3 = 2\n"
    );
}
