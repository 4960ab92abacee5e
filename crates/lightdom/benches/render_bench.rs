use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use lightdom::{execute_on, AddClassCommand, ElementBuilder, MarkupRenderer, Node, NullReporter};

fn wide_tree() -> Node {
    let rows = (0..200).map(|row| {
        ElementBuilder::new("li")
            .class("row")
            .text(format!("Row {row}"))
            .child(ElementBuilder::new("img").class("icon").build().unwrap())
            .build()
            .unwrap()
    });

    ElementBuilder::new("ul")
        .class("list")
        .children(rows)
        .build_node()
        .unwrap()
}

fn render_benchmark(c: &mut Criterion) {
    let tree = wide_tree();
    let renderer = MarkupRenderer::default();

    c.bench_function("render: wide list", |b| b.iter(|| renderer.render(&tree)));
}

fn command_benchmark(c: &mut Criterion) {
    let tree = wide_tree();

    c.bench_function("command: add class to wide list", |b| {
        b.iter_batched(
            || tree.clone(),
            |mut tree| {
                execute_on(&mut tree, &mut AddClassCommand::new("highlight", NullReporter));
                tree
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, render_benchmark, command_benchmark);
criterion_main!(benches);
