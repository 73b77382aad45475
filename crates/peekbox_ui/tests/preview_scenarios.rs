//! # Preview Scenario Tests
//!
//! End-to-end checks of the renderer: merge, mode switching, geometry and
//! row size fallbacks.

use peekbox_core::{ItemStack, MergingStrategy};
use peekbox_ui::{
    CommandBuffer, ContainerSnapshot, PreviewConfig, PreviewMode, PreviewRenderer, RenderCommand,
    SlotMetrics,
};

const DIRT: u32 = 3;
const COBBLESTONE: u32 = 4;
const SHULKER_SLOTS: usize = 27;

fn shulker_box(contents: &[(usize, ItemStack)]) -> ContainerSnapshot<ItemStack> {
    let mut slots = vec![ItemStack::empty(); SHULKER_SLOTS];
    for (slot, stack) in contents {
        slots[*slot] = stack.clone();
    }
    ContainerSnapshot::new(slots).with_row_size(9)
}

#[test]
fn scenario_dirt_merges_into_one_group() {
    let source = shulker_box(&[(0, ItemStack::new(DIRT, 64)), (5, ItemStack::new(DIRT, 32))]);
    let mut renderer = PreviewRenderer::default();
    renderer.set_preview_from(&source, &PreviewConfig::default());

    let groups = renderer.state().groups();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].quantity(), 96);
    assert_eq!(groups[0].first_slot_seen(), 0);

    // Full mode: the pixel rectangle of slot 5 resolves back to its dirt.
    let rect = renderer.rect_for(5);
    assert_eq!(renderer.slot_at(rect.x, rect.y), Some(5));
    let entry = renderer.entry_at_point(rect.x, rect.y).unwrap();
    assert_eq!(entry.item_id, DIRT);
    assert_eq!(entry.count, 32);

    // Compact mode: one cell with the merged total.
    renderer.set_display_mode(PreviewMode::Compact);
    assert_eq!(renderer.entry_at(0).map(|s| s.count), Some(96));
    assert_eq!(renderer.entry_at(1), None);
}

#[test]
fn scenario_separate_keeps_attribute_variants() {
    let source = shulker_box(&[
        (2, ItemStack::new(COBBLESTONE, 10).with_component("name", "Gravel?")),
        (7, ItemStack::new(COBBLESTONE, 40)),
    ]);
    let config = PreviewConfig {
        merging_strategy: MergingStrategy::Separate,
        ..PreviewConfig::default()
    };
    let mut renderer = PreviewRenderer::default();
    renderer.set_preview_from(&source, &config);
    renderer.set_display_mode(PreviewMode::Compact);

    assert_eq!(renderer.inventory_size(), 2);
    let first = renderer.entry_at(0).unwrap();
    let second = renderer.entry_at(1).unwrap();
    assert_eq!((first.count, first.has_components()), (40, false));
    assert_eq!((second.count, second.component("name")), (10, Some("Gravel?")));
}

#[test]
fn scenario_ignore_strips_attributes() {
    let source = shulker_box(&[
        (0, ItemStack::new(COBBLESTONE, 10).with_component("name", "A")),
        (1, ItemStack::new(COBBLESTONE, 5).with_component("lore", "B")),
    ]);
    let config = PreviewConfig {
        merging_strategy: MergingStrategy::Ignore,
        ..PreviewConfig::default()
    };
    let mut renderer = PreviewRenderer::default();
    renderer.set_preview_from(&source, &config);
    renderer.set_display_mode(PreviewMode::Compact);

    assert_eq!(renderer.entry_at(0), Some(&ItemStack::new(COBBLESTONE, 15)));

    // Full mode still shows what each slot really holds.
    renderer.set_display_mode(PreviewMode::Full);
    assert_eq!(renderer.entry_at(1).and_then(|s| s.component("lore")), Some("B"));
}

#[test]
fn scenario_zero_row_size_falls_back() {
    let source = shulker_box(&[(0, ItemStack::new(DIRT, 1))]).with_row_size(0);
    let mut renderer = PreviewRenderer::default();

    renderer.set_preview_from(&source, &PreviewConfig::default());
    assert_eq!(renderer.row_size(), 9);

    let unset = PreviewConfig::from_toml_str("default_row_size = 0").unwrap();
    renderer.set_preview_from(&source, &unset);
    assert_eq!(renderer.row_size(), 9);

    let narrow = PreviewConfig::from_toml_str("default_row_size = 3").unwrap();
    renderer.set_preview_from(&source, &narrow);
    assert_eq!(renderer.row_size(), 3);
    renderer.set_display_mode(PreviewMode::Compact);
    assert_eq!(renderer.row_size(), 3);
}

#[test]
fn geometry_round_trips_in_both_modes() {
    for row_size in 1..=14 {
        let config = PreviewConfig {
            default_row_size: row_size,
            ..PreviewConfig::default()
        };
        let mut renderer = PreviewRenderer::new(SlotMetrics::STANDARD);
        renderer.set_preview(&[ItemStack::new(DIRT, 1)], 1, row_size, &config);

        for mode in [PreviewMode::Full, PreviewMode::Compact] {
            renderer.set_display_mode(mode);
            for slot in 0..300 {
                let rect = renderer.rect_for(slot);
                assert_eq!(renderer.slot_at(rect.x, rect.y), Some(slot), "row size {row_size}");
            }
        }
    }
}

#[test]
fn inventory_size_bounds_per_mode() {
    let mut renderer = PreviewRenderer::default();

    let empty = shulker_box(&[]);
    renderer.set_preview_from(&empty, &PreviewConfig::default());
    assert_eq!(renderer.inventory_size(), SHULKER_SLOTS);
    renderer.set_display_mode(PreviewMode::Compact);
    assert_eq!(renderer.inventory_size(), 1);

    let mixed = shulker_box(&[
        (0, ItemStack::new(DIRT, 1)),
        (1, ItemStack::new(COBBLESTONE, 1)),
        (2, ItemStack::new(DIRT, 1)),
    ]);
    renderer.set_preview_from(&mixed, &PreviewConfig::default());
    assert_eq!(renderer.inventory_size(), renderer.state().groups().len());
    renderer.set_display_mode(PreviewMode::Full);
    assert_eq!(renderer.inventory_size(), SHULKER_SLOTS);
}

#[test]
fn draw_pass_skips_empty_slots() {
    let source = shulker_box(&[(26, ItemStack::new(DIRT, 1)), (13, ItemStack::new(DIRT, 5))]);
    let mut renderer = PreviewRenderer::default();
    renderer.set_preview_from(&source, &PreviewConfig::default());

    let mut canvas = CommandBuffer::new();
    renderer.draw_items(0, 0, &mut canvas);

    let drawn: Vec<(i32, i32)> = canvas
        .commands()
        .iter()
        .filter_map(|command| match command {
            RenderCommand::Entry { x, y, .. } => Some((*x, *y)),
            _ => None,
        })
        .collect();
    // Slot 13 (column 4, row 1) then slot 26 (column 8, row 2).
    assert_eq!(drawn, vec![(8 + 18 * 4, 8 + 18), (8 + 18 * 8, 8 + 36)]);
}
