use bee_ir::{Ast, EntityId};

use crate::TypeSystem;

/// Canonical function name: `(a: s32, b: f32) -> s32`, without the arrow for `void`.
pub fn signature_name(ast: &Ast, types: &TypeSystem, params: &[EntityId], ret: EntityId) -> String {
    let params: Vec<String> = params
        .iter()
        .map(|param| {
            format!(
                "{}: {}",
                ast.entity(*param).name,
                types.type_name(ast, *param)
            )
        })
        .collect();
    let params = params.join(", ");

    if types.entity_type(ast, ret) == types.void {
        format!("({params})")
    } else {
        format!("({params}) -> {}", types.type_name(ast, ret))
    }
}
