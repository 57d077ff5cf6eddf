//! Bone Mapping Benchmark
//!
//! Scenario:
//! - 55-bone humanoid source rig (canonical names)
//! - Same rig under a differently-named generic convention (fuzzy path)
//! - Same rig under Mixamo names (direct path + fallback)

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use rigmap_core::engine::MIXAMO_BONE_TABLE;
use rigmap_core::nlp::{bone_similarity, levenshtein_distance, normalize_bone_name};
use rigmap_core::{AutoMapper, DirectMapper, MapperConfig, Retargeter};

fn source_rig() -> Vec<String> {
    MIXAMO_BONE_TABLE.iter().map(|(source, _)| source.to_string()).collect()
}

fn mixamo_rig() -> Vec<String> {
    MIXAMO_BONE_TABLE.iter().map(|(_, target)| target.to_string()).collect()
}

/// Rename canonical bones the way a generic DCC export might.
fn generic_rig() -> Vec<String> {
    MIXAMO_BONE_TABLE
        .iter()
        .map(|(source, _)| {
            let renamed = source.replace('_', ".");
            format!("jnt_{}", renamed.to_uppercase())
        })
        .collect()
}

/// Benchmark: name normalization and scoring primitives.
fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives");

    group.bench_function("normalize", |bench| {
        bench.iter(|| black_box(normalize_bone_name(black_box("mixamorig_LeftHandIndex1"))))
    });

    group.bench_function("levenshtein_distance", |bench| {
        bench.iter(|| black_box(levenshtein_distance(black_box("lefthandindex1"), black_box("index_01_left"))))
    });

    group.bench_function("bone_similarity", |bench| {
        bench.iter(|| black_box(bone_similarity(black_box("upperarm_left"), black_box("leftarm"))))
    });

    group.finish();
}

/// Benchmark: full-rig mapping on both paths.
fn bench_full_rig(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_rig");

    let source = source_rig();
    let generic = generic_rig();
    let mixamo = mixamo_rig();
    group.throughput(Throughput::Elements(source.len() as u64));

    let auto = AutoMapper::new();
    group.bench_function("auto_map_generic", |bench| {
        bench.iter(|| black_box(auto.auto_map(black_box(&source), black_box(&generic))))
    });

    let direct = DirectMapper::mixamo();
    group.bench_function("direct_map_mixamo", |bench| {
        bench.iter(|| black_box(direct.direct_map(black_box(&source), black_box(&mixamo))))
    });

    let retargeter = match Retargeter::new(MapperConfig::default()) {
        Ok(r) => r,
        Err(e) => panic!("default config rejected: {e}"),
    };
    group.bench_function("retarget_mixamo", |bench| {
        bench.iter(|| black_box(retargeter.map(black_box(&source), black_box(&mixamo))))
    });

    group.finish();
}

criterion_group!(benches, bench_primitives, bench_full_rig);
criterion_main!(benches);
