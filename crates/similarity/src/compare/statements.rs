//! Statements compare the sub-expression that identifies them and, when
//! position checking is on, the statements around them.

use java_model::{Feature, NodeKind, NodeRef};

use crate::context::Context;
use crate::Similarity;

pub(super) fn compare<'m>(a: NodeRef<'m>, b: NodeRef<'m>, ctx: &mut Context<'_>) -> Similarity {
    let own = match a.kind() {
        NodeKind::Throw => return Similarity::Same,
        NodeKind::LocalVariableStatement => ctx
            .similar_feature(a, b, Feature::Variable)
            .and_then(|| ctx.similar_ignoring_position(enclosing(a), enclosing(b))),
        NodeKind::ExpressionStatement | NodeKind::YieldStatement => {
            ctx.similar_feature(a, b, Feature::Expression)
        }
        NodeKind::Return => ctx.similar_feature(a, b, Feature::ReturnValue),
        NodeKind::Condition
        | NodeKind::WhileLoop
        | NodeKind::DoWhileLoop
        | NodeKind::ForLoop
        | NodeKind::NormalSwitchCase
        | NodeKind::Assert => ctx.similar_feature(a, b, Feature::Condition),
        NodeKind::ForEachLoop => ctx
            .similar_feature(a, b, Feature::Collection)
            .and_then(|| ctx.similar_feature(a, b, Feature::Variable)),
        NodeKind::Switch => ctx.similar_feature(a, b, Feature::Variable),
        NodeKind::Break | NodeKind::Continue => ctx.similar_feature(a, b, Feature::Target),
        NodeKind::SynchronizedBlock => ctx.similar_feature(a, b, Feature::LockProvider),
        NodeKind::CatchBlock => ctx.similar_feature(a, b, Feature::Parameter),
        // blocks, try blocks, default cases and empty statements
        _ => Similarity::Same,
    };

    if !ctx.check_statement_position() {
        return own;
    }
    own.and_then(|| compare_neighbors(a, b, ctx))
}

/// Nearest container that is not a block.
fn enclosing(node: NodeRef<'_>) -> Option<NodeRef<'_>> {
    node.ancestors().find(|n| n.kind() != NodeKind::Block)
}

/// Predecessors or successors must be similar. A missing neighbor on both
/// sides counts as similar; a missing neighbor on one side does not.
fn compare_neighbors<'m>(a: NodeRef<'m>, b: NodeRef<'m>, ctx: &mut Context<'_>) -> Similarity {
    ctx.similar_ignoring_position(neighbor(a, -1), neighbor(b, -1))
        .or_else(|| ctx.similar_ignoring_position(neighbor(a, 1), neighbor(b, 1)))
}

fn neighbor(node: NodeRef<'_>, offset: isize) -> Option<NodeRef<'_>> {
    let index = node.position_in_container()?.checked_add_signed(offset)?;
    node.siblings().get(index).copied()
}
