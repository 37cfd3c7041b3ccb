//! Stack allocator benchmarks
//!
//! The allocator sits on the renderer's per-frame hot path; these track
//! the cost of the two allocation flavours and of frame-shaped recycling.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use prism_memory::allocator::{StackAllocator, StackConfig, StackFrame};

fn bench_alloc_free_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("alloc_free_cycle");
    group.throughput(Throughput::Elements(1));

    group.bench_function("aligned_256", |b| {
        let stack = StackAllocator::with_config(64 * 1024, StackConfig::production());
        b.iter(|| unsafe {
            let ptr = stack.allocate(256, 16).unwrap();
            black_box(ptr);
            stack.free(ptr).unwrap();
        });
    });

    group.bench_function("unaligned_256", |b| {
        let stack = StackAllocator::with_config(64 * 1024, StackConfig::production());
        b.iter(|| unsafe {
            let ptr = stack.allocate_unaligned(256).unwrap();
            black_box(ptr);
            stack.free_unaligned(ptr).unwrap();
        });
    });

    group.finish();
}

fn bench_frame_scratch(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_scratch");
    group.throughput(Throughput::Elements(16));

    // Sixteen scratch buffers per frame, recycled wholesale by the frame
    // drop — the renderer's usage pattern.
    group.bench_function("per_frame_scratch_16x512", |b| {
        let stack = StackAllocator::with_config(1024 * 1024, StackConfig::production());
        b.iter(|| unsafe {
            let _frame = StackFrame::new(&stack);
            for _ in 0..16 {
                black_box(stack.allocate(512, 16).unwrap());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_alloc_free_cycle, bench_frame_scratch);
criterion_main!(benches);
