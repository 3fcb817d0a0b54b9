use kata::{CastTarget, Caster, Value, ValueKind};

// Every layer that catches and rethrows increments the blame offset once,
// so the reported offset counts the internal frames between the failure and
// the caller of `cast`.

#[test]
fn scalar_failure_blames_through_one_rethrow() {
    let caster = Caster::new();
    let err = caster
        .cast(&Value::Str("123abc".into()), &CastTarget::Kind(ValueKind::Int))
        .unwrap_err();
    // Raised in the scalar layer (1), rethrown by the dispatcher (2).
    assert_eq!(err.offset(), 2);
}

#[test]
fn xml_int_failure_adds_the_inner_delegation_frame() {
    let caster = Caster::new();
    let err = caster
        .cast(&Value::xml("foo", "string"), &CastTarget::Kind(ValueKind::Int))
        .unwrap_err();
    // Scalar layer (1), object caster's delegation (2), dispatcher (3).
    assert_eq!(err.offset(), 3);
}

#[test]
fn array_failure_blames_through_the_dispatcher() {
    let caster = Caster::new();
    let err = caster
        .cast(&Value::array(vec![]), &CastTarget::Kind(ValueKind::Bool))
        .unwrap_err();
    assert_eq!(err.offset(), 2);
}

#[test]
fn caller_side_rethrow_keeps_counting() {
    let caster = Caster::new();
    let mut err = caster
        .cast(&Value::Str("x1".into()), &CastTarget::Kind(ValueKind::Int))
        .unwrap_err();
    // A wrapper that catches and rethrows does the same bookkeeping.
    err.increment_offset();
    assert_eq!(err.offset(), 3);
}
