//! Loads the bundled recipe pack, prints the registry, and rolls a few
//! dissolver outputs.
//!
//! Run with: `cargo run --package alembic-data --example load_pack [pack_dir]`
//! Set `RUST_LOG=alembic_data=debug` to see skipped elements too.

use std::path::PathBuf;

use alembic_core::item::Stack;
use alembic_core::resolver::MaterialTable;
use alembic_core::rng::SimRng;
use alembic_data::load_pack;

const SEED: u64 = 0xA1E3B1C;

fn name(materials: &MaterialTable, stack: &Stack) -> String {
    let item = materials.item_name(stack.item).unwrap_or("?");
    format!("{}x {item}:{}", stack.quantity, stack.meta)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data")));

    let pack = load_pack(&dir).unwrap_or_else(|e| panic!("failed to load pack {}: {e}", dir.display()));
    let reg = &pack.registry;

    println!("=== {} ===", dir.display());
    println!(
        "added {}, removed {}, skipped {}, failed documents {}",
        pack.summary.added,
        pack.summary.removed,
        pack.summary.skipped,
        pack.failed.len()
    );
    println!(
        "decomposition {}, combination {}, evaporation {}, electrolysis {}\n",
        reg.decomposition().len(),
        reg.combination().len(),
        reg.evaporation().len(),
        reg.electrolysis().len()
    );

    let mut rng = SimRng::new(SEED);
    for recipe in reg.decomposition() {
        println!("dissolve {}", recipe.input);
        for (i, group) in recipe.output.groups.iter().enumerate() {
            let outputs: Vec<String> = group.outputs.iter().map(|s| name(&pack.materials, s)).collect();
            println!(
                "    {:>5.1}%  {}",
                recipe.output.group_chance(i) * 100.0,
                outputs.join(", ")
            );
        }
        for _ in 0..3 {
            let rolled: Vec<String> = recipe
                .output
                .resolve(&mut rng)
                .iter()
                .map(|s| name(&pack.materials, s))
                .collect();
            println!("    roll -> [{}]", rolled.join(", "));
        }
    }

    for recipe in reg.electrolysis() {
        let fluid = pack.materials.fluid_name(recipe.input.fluid).unwrap_or("?");
        println!(
            "electrolyze {}mB {fluid} with {} -> {}, {}",
            recipe.input.amount,
            recipe.electrolyte,
            name(&pack.materials, &recipe.output_one),
            name(&pack.materials, &recipe.output_two)
        );
    }
}
