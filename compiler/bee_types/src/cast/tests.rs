use super::*;
use bee_ir::{AtomDesc, Entity, Function, Record};
use pretty_assertions::assert_eq;

fn setup() -> (Ast, TypeSystem) {
    let mut ast = Ast::new();
    let types = TypeSystem::install(&mut ast);
    (ast, types)
}

#[test]
fn lattice_ordering() {
    assert!(TypeCast::Same < TypeCast::Inferred);
    assert!(TypeCast::Inferred < TypeCast::Narrowed);
    assert!(TypeCast::Narrowed < TypeCast::Transmuted);
    assert!(TypeCast::Transmuted < TypeCast::Error);
    assert!(TypeCast::Narrowed.is_implicit());
    assert!(!TypeCast::Transmuted.is_implicit());
}

#[test]
fn atom_casts() {
    let (ast, types) = setup();
    assert_eq!(types.cast(&ast, types.s32, types.s64), TypeCast::Inferred);
    assert_eq!(types.cast(&ast, types.s64, types.s32), TypeCast::Narrowed);
    assert_eq!(types.cast(&ast, types.s32, types.f32), TypeCast::Transmuted);
    assert_eq!(types.cast(&ast, types.u8, types.s8), TypeCast::Transmuted);
    assert_eq!(types.cast(&ast, types.s8, types.s32), TypeCast::Inferred);
    assert_eq!(types.cast(&ast, types.f64, types.s32), TypeCast::Transmuted);
    // Distinct entities with identical shape.
    assert_eq!(types.cast(&ast, types.char, types.s8), TypeCast::Same);
}

#[test]
fn every_atom_pair_has_one_classification() {
    let (ast, types) = setup();
    for from in types.atoms() {
        assert_eq!(types.cast(&ast, from, from), TypeCast::Same);
        for into in types.atoms() {
            let cast = types.cast(&ast, from, into);
            assert!(cast < TypeCast::Error, "atoms never cast with Error");
            let a = ast.entity(from).as_atom().unwrap_or(Atom {
                desc: AtomDesc::RAW,
                size: 0,
            });
            let b = ast.entity(into).as_atom().unwrap_or(Atom {
                desc: AtomDesc::RAW,
                size: 0,
            });
            if a.desc == b.desc {
                assert!(cast < TypeCast::Transmuted);
            } else {
                assert_eq!(cast, TypeCast::Transmuted);
            }
        }
    }
}

#[test]
fn vars_cast_through_their_type() {
    let (mut ast, types) = setup();
    let x = ast.install(Entity::var("x", types.s8));
    assert_eq!(types.cast(&ast, x, types.s32), TypeCast::Inferred);
    assert_eq!(types.cast(&ast, types.s64, x), TypeCast::Narrowed);
}

#[test]
fn different_kinds_are_errors() {
    let (mut ast, types) = setup();
    let frame = ast.stack_push().unwrap_or(ast.main_frame());
    let point = ast.push_entity(Entity::new("Point", EntityKind::Struct(Record { frame })));
    assert_eq!(types.cast(&ast, point, types.s32), TypeCast::Error);
    assert_eq!(types.cast(&ast, types.void, types.s32), TypeCast::Error);
    assert_eq!(types.cast(&ast, types.void, types.void), TypeCast::Same);
}

#[test]
fn functions_need_identical_signatures() {
    let (mut ast, types) = setup();
    let a = ast.push_entity(Entity::var("a", types.s32));
    let b = ast.push_entity(Entity::var("b", types.s32));
    let c = ast.push_entity(Entity::var("c", types.s64));
    let function = |params: Vec<EntityId>, ret: EntityId| {
        Entity::new("f", EntityKind::Function(Function { params, ret }))
    };
    let f = ast.push_entity(function(vec![a], types.s32));
    let g = ast.push_entity(function(vec![b], types.s32));
    let h = ast.push_entity(function(vec![c], types.s32));
    let k = ast.push_entity(function(vec![a, b], types.s32));
    let r = ast.push_entity(function(vec![a], types.void));

    assert_eq!(types.cast(&ast, f, g), TypeCast::Same);
    assert_eq!(types.cast(&ast, f, h), TypeCast::Error);
    assert_eq!(types.cast(&ast, f, k), TypeCast::Error);
    assert_eq!(types.cast(&ast, f, r), TypeCast::Error);
}

#[test]
fn records_compare_members_positionally() {
    let (mut ast, types) = setup();
    let mut record = |members: &[(&str, EntityId)]| {
        let frame = ast.stack_push().unwrap_or(ast.main_frame());
        for (name, ty) in members {
            ast.install(Entity::var(*name, *ty));
        }
        let _ = ast.stack_pop();
        ast.push_entity(Entity::new("R", EntityKind::Struct(Record { frame })))
    };
    let p = record(&[("x", types.s32), ("y", types.s32)]);
    let q = record(&[("a", types.s32), ("b", types.s32)]);
    let r = record(&[("x", types.s32), ("y", types.f32)]);
    let s = record(&[("x", types.s32)]);

    assert_eq!(types.cast(&ast, p, q), TypeCast::Same);
    assert_eq!(types.cast(&ast, p, r), TypeCast::Error);
    assert_eq!(types.cast(&ast, p, s), TypeCast::Error);
}

mod proptest_cast {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn cast_is_antisymmetric_on_size(i in 0usize..14, j in 0usize..14) {
            let (ast, types) = setup();
            let (from, into) = (types.atoms()[i], types.atoms()[j]);
            let forward = types.cast(&ast, from, into);
            let backward = types.cast(&ast, into, from);
            match forward {
                TypeCast::Inferred => prop_assert_eq!(backward, TypeCast::Narrowed),
                TypeCast::Narrowed => prop_assert_eq!(backward, TypeCast::Inferred),
                other => prop_assert_eq!(backward, other),
            }
        }
    }
}
