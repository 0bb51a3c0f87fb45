use super::*;
use pretty_assertions::assert_eq;

#[test]
fn desc_composition_prefers_float_then_signed() {
    assert_eq!((AtomDesc::SIGNED | AtomDesc::FLOAT).dominant(), AtomDesc::FLOAT);
    assert_eq!((AtomDesc::RAW | AtomDesc::SIGNED).dominant(), AtomDesc::SIGNED);
    assert_eq!(AtomDesc::RAW.dominant(), AtomDesc::RAW);
    assert_eq!(AtomDesc::RAW.name(), "raw");
    assert_eq!(AtomDesc::SIGNED.name(), "signed");
    assert_eq!((AtomDesc::SIGNED | AtomDesc::FLOAT).name(), "float");
}

#[test]
fn type_like_covers_everything_but_vars() {
    let type_like = [
        EntityTag::Function,
        EntityTag::Void,
        EntityTag::Atom,
        EntityTag::Struct,
        EntityTag::Enum,
    ];
    for tag in type_like {
        assert!(tag.is_type_like(), "{tag:?}");
        assert!(!tag.is_value_like(), "{tag:?}");
    }
    assert!(EntityTag::Var.is_value_like());
    assert!(!EntityTag::Var.is_type_like());
}

#[test]
fn accessors_match_kind() {
    let s32 = Entity::atom("s32", AtomDesc::SIGNED, 4);
    assert_eq!(s32.tag(), EntityTag::Atom);
    assert_eq!(
        s32.as_atom(),
        Some(Atom {
            desc: AtomDesc::SIGNED,
            size: 4
        })
    );
    assert!(s32.as_var().is_none());

    let x = Entity::var("x", EntityId::new(3));
    assert_eq!(x.tag(), EntityTag::Var);
    assert_eq!(x.as_var().map(|v| v.ty), Some(EntityId::new(3)));
    assert!(!x.is_type_like());

    let point = Entity::new("Point", EntityKind::Struct(Record { frame: FrameId::new(2) }));
    assert_eq!(point.record_frame(), Some(FrameId::new(2)));
    assert_eq!(Entity::void("void").record_frame(), None);
}
