use super::*;
use crate::{tags, BlockBuilder};
use pretty_assertions::assert_eq;

#[test]
fn value_resolves_single_child() {
    let block = BlockBuilder::new(tags::LOGIC_NEGATE)
        .value("BOOL", BlockBuilder::boolean(true))
        .build();
    assert_eq!(
        block.value("BOOL").map(|b| b.kind.as_str()),
        Ok(tags::LOGIC_BOOLEAN)
    );
}

#[test]
fn value_missing_slot_is_error() {
    let block = Block::new(tags::LOGIC_NEGATE);
    let err = block.value("BOOL").err();
    assert_eq!(
        err,
        Some(SlotError::Missing {
            name: "BOOL".into()
        })
    );
}

#[test]
fn value_with_zero_or_many_children_is_error() {
    let block = BlockBuilder::new(tags::MATH_ARITHMETIC)
        .value_slot("A", Vec::new())
        .value_slot(
            "B",
            vec![
                BlockBuilder::number(1.0).build(),
                BlockBuilder::number(2.0).build(),
            ],
        )
        .build();
    assert!(matches!(
        block.value("A"),
        Err(SlotError::NotSingle { count: 0, .. })
    ));
    let err = block.value("B").err();
    assert!(matches!(err, Some(SlotError::NotSingle { count: 2, .. })));
    assert_eq!(err.as_ref().map(SlotError::name), Some("B"));
}

#[test]
fn statement_absent_is_none() {
    let block = Block::new(tags::CONTROLS_IF);
    assert_eq!(block.statement("DO0"), Ok(None));
}

#[test]
fn statement_with_two_children_is_error() {
    let mut block = Block::new(tags::CONTROLS_IF);
    block.statements.push(Slot {
        name: "DO0".into(),
        blocks: vec![Block::new(tags::TEXT), Block::new(tags::TEXT)],
    });
    assert!(block.statement("DO0").is_err());
}

#[test]
fn field_lookup() {
    let block = BlockBuilder::text("hello").build();
    assert_eq!(block.field("TEXT"), Some("hello"));
    assert_eq!(block.field("NUM"), None);
}

#[test]
fn sequence_links_in_order() {
    let head = Block::sequence(vec![
        BlockBuilder::text("1").build(),
        BlockBuilder::text("2").build(),
        BlockBuilder::text("3").build(),
    ]);
    let texts: Vec<_> = head
        .iter()
        .flat_map(Block::chain)
        .filter_map(|b| b.field("TEXT"))
        .collect();
    assert_eq!(texts, vec!["1", "2", "3"]);
}

#[test]
fn sequence_preserves_existing_chains() {
    let first = BlockBuilder::text("1").next(BlockBuilder::text("2")).build();
    let head = Block::sequence(vec![first, BlockBuilder::text("3").build()]);
    let count = head.as_ref().map_or(0, |h| h.chain().count());
    assert_eq!(count, 3);
}

#[test]
fn sequence_of_nothing_is_none() {
    assert_eq!(Block::sequence(Vec::new()), None);
}

#[test]
fn procedure_mutation_lists_params() {
    let m = Mutation::procedure("f", ["a", "b"]);
    assert_eq!(m.name.as_deref(), Some("f"));
    assert_eq!(m.param_names().collect::<Vec<_>>(), vec!["a", "b"]);
    let branches = Mutation::branches(2, true);
    assert_eq!((branches.elseif, branches.else_count), (2, 1));
}
