//! Build-level checks: conforming types compile against both entry points,
//! and non-conforming ones are rejected with the `Operation` diagnostic.

#![cfg(feature = "derive")]

#[test]
fn ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/pass/*.rs");
    t.compile_fail("tests/ui/fail/*.rs");
}
