use criterion::{Criterion, criterion_group, criterion_main};
use plotdoc::{ChartKind, FigureRequest, Table, build_figure, deep_merge};
use serde_json::{Value, json};
use std::hint::black_box;

fn bench_deep_merge_layouts(c: &mut Criterion) {
    let base = json!({
        "margin": {"l": 40, "r": 20, "t": 40, "b": 40},
        "plot_bgcolor": "#121212",
        "paper_bgcolor": "#121212",
        "font": {"color": "white"},
        "xaxis": {"gridcolor": "rgba(255, 255, 255, 0.1)", "linecolor": "white"},
        "yaxis": {"gridcolor": "rgba(255, 255, 255, 0.1)", "linecolor": "white"},
    });
    let overlay = json!({
        "title": "Monthly Sales",
        "margin": {"l": 80},
        "xaxis": {"title": "Month"},
        "yaxis": {"title": "Sales", "range": [0, 100]},
    });

    c.bench_function("deep_merge_layouts", |b| {
        b.iter(|| deep_merge(black_box(&base), black_box(&overlay)))
    });
}

fn bench_build_figure_10k_rows(c: &mut Criterion) {
    let n = 10_000;
    let x: Vec<Value> = (0..n).map(Value::from).collect();
    let y: Vec<Value> = (0..n).map(|i| Value::from(i * 2)).collect();
    let table = Table::new().with_column("t", x).with_column("v", y);
    let request = FigureRequest::new("t", ["v"], ChartKind::Line);

    c.bench_function("build_figure_10k_rows", |b| {
        b.iter(|| build_figure(black_box(&table), black_box(&request)).expect("build"))
    });
}

criterion_group!(benches, bench_deep_merge_layouts, bench_build_figure_10k_rows);
criterion_main!(benches);
