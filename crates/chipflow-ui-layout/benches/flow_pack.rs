use chipflow_ui_layout::{pack, MeasuredItem};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const MAX_WIDTH: i32 = 1080;
const ITEM_COUNTS: &[usize] = &[16, 256, 4096];

fn items(count: usize) -> Vec<MeasuredItem> {
    MeasuredItem::from_sizes((0..count).map(|i| (48 + ((i * 37) % 160) as i32, 40)))
}

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("flow_pack");
    for &count in ITEM_COUNTS {
        let items = items(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &items, |b, items| {
            b.iter(|| pack(black_box(items), MAX_WIDTH, 16, 16).expect("bounded width"));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pack);
criterion_main!(benches);
