use kata::{CastTarget, Caster, Value, ValueKind};

#[test]
fn nil_preserved_by_default_for_every_target() {
    let caster = Caster::new();
    let targets = [
        CastTarget::Kind(ValueKind::Str),
        CastTarget::Kind(ValueKind::Int),
        CastTarget::Kind(ValueKind::Num),
        CastTarget::Kind(ValueKind::Bool),
        CastTarget::Kind(ValueKind::Array),
        CastTarget::Kind(ValueKind::Object),
        CastTarget::Kind(ValueKind::DateTime),
        CastTarget::class("Invoice"),
    ];
    for target in &targets {
        assert_eq!(
            caster.cast(&Value::Nil, target).unwrap(),
            Value::Nil,
            "target {}",
            target
        );
    }
}

#[test]
fn nil_coerces_to_zero_values_when_not_preserved() {
    let caster = Caster::new();
    let cast = |target: &CastTarget| caster.cast_with(&Value::Nil, target, false).unwrap();

    assert_eq!(cast(&CastTarget::Kind(ValueKind::Str)), Value::Str(String::new()));
    assert_eq!(cast(&CastTarget::Kind(ValueKind::Int)), Value::Int(0));
    assert_eq!(cast(&CastTarget::Kind(ValueKind::Num)), Value::Num(0.0));
    assert_eq!(cast(&CastTarget::Kind(ValueKind::Bool)), Value::Bool(false));
    assert_eq!(cast(&CastTarget::Kind(ValueKind::Array)), Value::array(vec![]));
    assert_eq!(cast(&CastTarget::Kind(ValueKind::Object)), Value::Nil);
    assert_eq!(cast(&CastTarget::class("Invoice")), Value::Nil);
}
