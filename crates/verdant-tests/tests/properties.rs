//! Property tests: random operation sequences preserve the garden invariants.

use proptest::prelude::*;

use verdant_core::events::GardenEvent;
use verdant_core::traits::Ledger;
use verdant_core::types::{Plant, PlantId, Stage};
use verdant_tests::helpers::{acct, new_garden, ENTRY, REWARD};

/// One step of a randomly generated session.
///
/// `Rewind` models a caller clock running behind earlier calls; persisted
/// state must still never move backwards.
#[derive(Clone, Debug)]
enum Op {
    Advance(u64),
    Rewind(u64),
    Seed(u8),
    Water(u8, u64),
    Refresh(u64),
    Harvest(u8, u64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u64..=400).prop_map(Op::Advance),
        (1u64..=200).prop_map(Op::Rewind),
        (1u8..=4).prop_map(Op::Seed),
        ((1u8..=4), (0u64..=20)).prop_map(|(a, i)| Op::Water(a, i)),
        (0u64..=20).prop_map(Op::Refresh),
        ((1u8..=4), (0u64..=20)).prop_map(|(a, i)| Op::Harvest(a, i)),
    ]
}

fn check_invariants(plants: &[Plant], previous: &[Plant]) {
    for plant in plants {
        assert!(plant.resource_level <= 100);
        if !plant.alive {
            assert_eq!(plant.resource_level, 0, "dead plant {} holds water", plant.id);
        }
    }
    // Stage is non-decreasing while alive and frozen after death; ids,
    // owners, and planting times never change.
    for (now, before) in plants.iter().zip(previous) {
        assert_eq!(now.id, before.id);
        assert_eq!(now.owner, before.owner);
        assert_eq!(now.planted_at, before.planted_at);
        if before.alive {
            assert!(now.stage >= before.stage, "stage regressed on {}", now.id);
        } else {
            assert!(!now.alive, "plant {} came back to life", now.id);
            assert_eq!(now.stage, before.stage, "dead stage moved on {}", now.id);
        }
        if !before.active {
            assert!(!now.active, "plant {} reactivated", now.id);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_sessions_preserve_invariants(ops in proptest::collection::vec(op_strategy(), 1..60)) {
        let mut garden = new_garden();
        let mut now = 0u64;
        let mut snapshot: Vec<Plant> = Vec::new();

        for op in ops {
            match op {
                Op::Advance(secs) => now += secs,
                Op::Rewind(secs) => now = now.saturating_sub(secs),
                Op::Seed(owner) => {
                    // Errors are fine; state must simply be untouched on failure.
                    let _ = garden.seed(acct(owner), ENTRY, now);
                }
                Op::Water(owner, index) => {
                    let _ = garden.water(PlantId(index + 1), acct(owner), now);
                }
                Op::Refresh(index) => {
                    let _ = garden.refresh(PlantId(index + 1), now);
                }
                Op::Harvest(owner, index) => {
                    let _ = garden.harvest(PlantId(index + 1), acct(owner), now);
                }
            }

            let plants: Vec<Plant> = (1..=garden.plant_count() as u64)
                .filter_map(|id| garden.get_plant(PlantId(id), now).ok())
                .collect();
            check_invariants(&plants, &snapshot);
            snapshot = plants;
        }

        // Conservation: balance equals entries taken minus rewards paid.
        let events = garden.take_events();
        let seeded = events.iter().filter(|e| matches!(e, GardenEvent::Planted { .. })).count() as u64;
        let harvested = events.iter().filter(|e| matches!(e, GardenEvent::Harvested { .. })).count() as u64;
        prop_assert_eq!(garden.ledger().balance(), seeded * ENTRY - harvested * REWARD);

        // Every harvested plant is inactive at its terminal stage.
        for event in &events {
            if let GardenEvent::Harvested { id, .. } = event {
                let plant = garden.get_plant(*id, now).unwrap();
                prop_assert!(!plant.active);
                prop_assert_eq!(plant.stage, Stage::Blooming);
            }
        }

        // At most one death notification per plant.
        for plant_id in 1..=garden.plant_count() as u64 {
            let deaths = events
                .iter()
                .filter(|e| matches!(e, GardenEvent::Died { id } if id.0 == plant_id))
                .count();
            prop_assert!(deaths <= 1, "plant {plant_id} died {deaths} times");
        }
    }
}
