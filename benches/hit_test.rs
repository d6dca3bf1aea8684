//! Pointer routing benchmarks.
//!
//! Routing is a linear scan over the interactions recorded for a frame, so
//! these measure how resolution time grows with the number of regions and
//! what an open window costs.
//!
//! Run with: cargo bench --bench hit_test

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use vctui::render::{DisplayContext, ListParams, ListRenderer};

const WIDTH: u16 = 200;
const HEIGHT: u16 = 60;

/// A frame with `regions` one-row click regions tiled over the screen.
fn generate_frame(regions: usize, with_window: bool) -> DisplayContext<usize> {
    let mut ctx = DisplayContext::new();
    for i in 0..regions {
        let x = (i % 10) as u16 * (WIDTH / 10);
        let y = ((i / 10) % usize::from(HEIGHT)) as u16;
        ctx.add_click(Rect::new(x, y, WIDTH / 10, 1), i, (i % 3) as i32);
        ctx.add_hover(Rect::new(x, y, WIDTH / 10, 1), i, 0);
    }
    if with_window {
        let rect = Rect::new(50, 10, 40, 12);
        let mut window = ctx.window(rect, 100);
        for row in 0..10 {
            window.add_click(Rect::new(51, 11 + row, 38, 1), usize::from(row), 101);
        }
    }
    ctx
}

fn press(x: u16, y: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    }
}

/// Benchmark press resolution as the region count grows.
fn benchmark_press_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("press_scaling");

    for regions in [100, 1_000, 10_000] {
        let ctx = generate_frame(regions, false);
        group.bench_with_input(BenchmarkId::new("process_mouse_event", regions), &ctx, |b, ctx| {
            b.iter(|| {
                let positions = [(0, 0), (WIDTH / 2, HEIGHT / 2), (WIDTH - 1, HEIGHT - 1)];
                for &(x, y) in &positions {
                    black_box(ctx.process_mouse_event(black_box(press(x, y))));
                }
            });
        });
    }

    group.finish();
}

/// Benchmark routing inside and outside an open window.
fn benchmark_window_scope(c: &mut Criterion) {
    let ctx = generate_frame(1_000, true);
    let mut group = c.benchmark_group("window_scope_1k");

    for (name, x, y) in [("inside", 60, 15), ("outside", 5, 40)] {
        group.bench_function(name, |b| {
            b.iter(|| ctx.process_mouse_event(black_box(press(x, y))));
        });
    }
    group.bench_function("hover_at", |b| {
        b.iter(|| ctx.hover_at(black_box(120), black_box(3)).copied());
    });

    group.finish();
}

/// Benchmark laying out and compositing a long virtualized list.
fn benchmark_list_frame(c: &mut Criterion) {
    let area = Rect::new(0, 0, WIDTH, HEIGHT);
    let mut group = c.benchmark_group("list_frame");

    for items in [1_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("render", items), &items, |b, &items| {
            let mut list = ListRenderer::new();
            let mut ctx: DisplayContext<usize> = DisplayContext::new();
            let mut buf = Buffer::empty(area);
            b.iter(|| {
                ctx.clear();
                list.render(
                    &mut ctx,
                    ListParams::new(area, items).follow_cursor(items / 2),
                    |i| 1 + i % 3,
                    |ctx, span| ctx.add_fill(span.rect, '.', Style::default(), 0),
                    Some,
                );
                ctx.render(&mut buf);
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(std::time::Duration::from_secs(5));
    targets = benchmark_press_scaling, benchmark_window_scope, benchmark_list_frame
}

criterion_main!(benches);
