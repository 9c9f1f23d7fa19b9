use crate::{Bug, invariant};

#[test]
fn bug_display_messages() {
    assert_eq!(
        Bug::ZeroArityFunction.to_string(),
        "Function has zero parameters; the arity-curry convention requires at least one"
    );
    assert_eq!(
        Bug::TailCallArityMismatch {
            name: "fact".into(),
            expected: 2,
            got: 1,
        }
        .to_string(),
        "TailCall to `fact` passes 1 argument(s) but the enclosing TailDef takes 2"
    );
}

#[test]
fn invariant_passes_silently() {
    invariant(true, || Bug::CounterExhausted);
}

#[test]
#[should_panic(expected = "internal compiler error")]
fn invariant_panics_with_bug_context() {
    invariant(false, || Bug::ZeroArityFunction);
}
