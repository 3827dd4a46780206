extern crate storyscope;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use storyscope::{
    analyze, analyze_many, validation::validate, AnalysisConfig, Story, StoryEdge, StoryNode,
};

/// Layered story: `layers` rows of `width` nodes, every node linked to two
/// nodes of the next row, last row all endings. Acyclic.
fn layered_story(layers: usize, width: usize) -> Story {
    let id = |layer: usize, column: usize| format!("n{layer}_{column}");

    let mut nodes = vec![StoryNode::start("start").with_choices(width.min(3))];
    let mut edges: Vec<StoryEdge> = (0..width)
        .map(|column| StoryEdge::new("start", id(0, column)))
        .collect();

    for layer in 0..layers {
        for column in 0..width {
            let node = if layer + 1 == layers {
                StoryNode::ending(id(layer, column))
            } else {
                edges.push(StoryEdge::new(id(layer, column), id(layer + 1, column)));
                edges.push(StoryEdge::new(
                    id(layer, column),
                    id(layer + 1, (column + 1) % width),
                ));
                StoryNode::normal(id(layer, column)).with_choices(2)
            };
            nodes.push(node);
        }
    }

    Story::new(nodes, edges)
}

/// Layered story with a back edge from every node to the row above, which
/// turns the whole body into one large strongly connected component.
fn loop_heavy_story(layers: usize, width: usize) -> Story {
    let mut story = layered_story(layers, width);
    for layer in 1..layers.saturating_sub(1) {
        for column in 0..width {
            story.edges.push(StoryEdge::new(
                format!("n{layer}_{column}"),
                format!("n{}_{column}", layer - 1),
            ));
        }
    }
    story
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    for &(layers, width) in &[(10, 10), (25, 20), (50, 40)] {
        let nodes = layers * width + 1;
        group.throughput(Throughput::Elements(nodes as u64));

        let layered = layered_story(layers, width);
        group.bench_with_input(BenchmarkId::new("layered", nodes), &layered, |b, story| {
            b.iter(|| analyze(black_box(&story.nodes), black_box(&story.edges)).unwrap());
        });

        let looped = loop_heavy_story(layers, width);
        group.bench_with_input(BenchmarkId::new("loop_heavy", nodes), &looped, |b, story| {
            b.iter(|| analyze(black_box(&story.nodes), black_box(&story.edges)).unwrap());
        });
    }
    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let story = loop_heavy_story(25, 20);
    c.bench_function("validate/loop_heavy_501", |b| {
        b.iter(|| validate(black_box(&story.nodes), black_box(&story.edges)).unwrap());
    });
}

fn bench_batch(c: &mut Criterion) {
    let stories: Vec<Story> = (0..64).map(|_| loop_heavy_story(10, 10)).collect();
    let mut group = c.benchmark_group("batch");
    group.throughput(Throughput::Elements(stories.len() as u64));
    group.bench_function("analyze_many_64", |b| {
        b.iter(|| analyze_many(black_box(&stories), AnalysisConfig::default()));
    });
    group.finish();
}

criterion_group!(benches, bench_analyze, bench_validate, bench_batch);
criterion_main!(benches);
