//! Criterion benchmarks for work priority scoring.
//!
//! Uses randomly generated colonies to measure pipeline evaluation cost
//! independent of any host game.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use work_priority::provider::{
    ActorAttributes, ActorId, Alert, GameStateSnapshot, Metric, Passion, WorkTypeId,
};
use work_priority::registry::StrategyRegistry;
use work_priority::strategy::{work_types, RunnerConfig, StrategyRunner};

// ===========================================================================
// Random colonies
// ===========================================================================

const ALERTS: [Alert; 5] = [
    Alert::HomeOnFire,
    Alert::ColdClothingNeeded,
    Alert::AnimalsRoaming,
    Alert::PlantsBlighted,
    Alert::NoActiveResearch,
];

const FRACTIONS: [Metric; 4] = [
    Metric::SuppressionNeed,
    Metric::LowFoodFraction,
    Metric::SpoilingFoodFraction,
    Metric::RefuelNeededFraction,
];

fn random_actor<R: Rng>(id: usize, rng: &mut R) -> ActorAttributes {
    let mut actor = ActorAttributes::new(format!("colonist-{id}"))
        .with_mood(rng.random_range(0.0..1.0))
        .with_health(rng.random_range(0.3..1.0))
        .with_move_speed(rng.random_range(0.5..1.5))
        .with_room_dirtiness(rng.random_range(0.0..1.0))
        .with_ranged_weapon(rng.random_bool(0.5))
        .with_brawler(rng.random_bool(0.1))
        .with_needs_treatment(rng.random_bool(0.05));

    for key in work_types::ALL {
        let passion = match rng.random_range(0..3) {
            0 => Passion::None,
            1 => Passion::Minor,
            _ => Passion::Major,
        };
        actor = actor.with_skill(key, rng.random_range(0.0..20.0), passion);
    }
    actor
}

fn random_colony(colonists: usize, seed: u64) -> GameStateSnapshot {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder = GameStateSnapshot::builder()
        .with_metric(Metric::ColonistsNeedingTreatment, rng.random_range(0.0..3.0))
        .with_metric(Metric::DownedColonists, rng.random_range(0.0..2.0));

    for alert in ALERTS {
        if rng.random_bool(0.3) {
            builder = builder.with_alert(alert);
        }
    }
    for metric in FRACTIONS {
        builder = builder.with_metric(metric, rng.random_range(0.0..1.0));
    }
    for id in 0..colonists {
        builder = builder.with_actor(random_actor(id, &mut rng));
    }
    builder.build()
}

fn registry() -> StrategyRegistry {
    StrategyRegistry::standard(work_types::ALL.iter().map(|k| WorkTypeId::new(*k)))
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_single_evaluation(c: &mut Criterion) {
    let registry = registry();
    let snapshot = random_colony(10, 42);
    let actor = ActorId::new("colonist-0");

    let mut group = c.benchmark_group("single_evaluation");
    for key in [work_types::FIREFIGHTER, work_types::COOKING, work_types::HAULING] {
        let work = WorkTypeId::new(key);
        group.bench_with_input(BenchmarkId::from_parameter(key), &work, |b, work| {
            b.iter(|| black_box(registry.evaluate(Some(&actor), Some(work), &snapshot)))
        });
    }
    group.finish();
}

fn bench_colony_sweep(c: &mut Criterion) {
    let registry = registry();
    let config = RunnerConfig::default();

    let mut group = c.benchmark_group("colony_sweep");
    group.sample_size(20);

    for colonists in [5usize, 20, 50] {
        let snapshot = random_colony(colonists, 7);
        let actors: Vec<ActorId> = snapshot.actors().map(|a| a.id.clone()).collect();
        group.bench_with_input(
            BenchmarkId::new("colonists", colonists),
            &(snapshot, actors),
            |b, (snapshot, actors)| {
                b.iter(|| {
                    for actor in actors {
                        let results =
                            StrategyRunner::evaluate_all(&registry, Some(actor), snapshot, &config);
                        black_box(results.ok());
                    }
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_single_evaluation, bench_colony_sweep);
criterion_main!(benches);
