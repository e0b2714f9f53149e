//! Menu rendering benchmark suite.
//!
//! Benchmarks the show/hide cycle at different tab counts:
//! - Synchronous renderer toggle (build, attach, measure, place, teardown)
//! - Full controller round trip through the renderer task
//!
//! Run with: cargo bench --bench menu_render
//! Results saved to: target/criterion/

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use tokio::runtime::Runtime;

use tab_list_menu::{
    Controller, ControllerPort, HeadlessPage, InMemoryTabs, MenuOptions, Point, Renderer,
    RendererHandle, TabDescriptor, TabId, channel,
};

// ============================================================================
// Benchmark Parameters
// ============================================================================

const TAB_COUNTS: &[usize] = &[10, 100, 1000];

fn tabs(count: usize) -> Vec<TabDescriptor> {
    (0..count)
        .map(|i| {
            let tab = TabDescriptor::new(TabId::new(i as i32 + 1), format!("Tab number {i}"));
            if i % 3 == 0 {
                tab
            } else {
                tab.with_icon(format!("https://site{i}.example/favicon.ico"))
            }
        })
        .collect()
}

// ============================================================================
// Benchmark: Renderer Toggle
// ============================================================================

fn bench_renderer_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("renderer_toggle");

    for &count in TAB_COUNTS {
        let tabs = tabs(count);
        group.bench_with_input(BenchmarkId::new("show_hide", count), &tabs, |b, tabs| {
            let (port, _inbox) = channel();
            let page = HeadlessPage::new(1920.0, 1080.0);
            let mut renderer = Renderer::new(page, MenuOptions::new(), ControllerPort::new(port));
            renderer.on_pointer_move(Point::new(1800.0, 900.0));

            b.iter(|| {
                renderer.toggle_menu(tabs);
                renderer.toggle_menu(tabs);
            });
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Controller Round Trip
// ============================================================================

fn bench_round_trip(c: &mut Criterion) {
    let rt = Runtime::new().expect("runtime");

    let mut group = c.benchmark_group("round_trip");

    for &count in TAB_COUNTS {
        let platform = InMemoryTabs::new();
        for tab in tabs(count) {
            platform.open(1, tab);
        }

        let (controller, _renderer, _inbox) = rt.block_on(async {
            let controller = Controller::new(platform);
            let (port, inbox) = channel();
            let renderer = RendererHandle::spawn(
                HeadlessPage::new(1920.0, 1080.0),
                MenuOptions::new(),
                ControllerPort::new(port),
            );
            controller.attach_renderer(TabId::new(1), renderer.port());
            (controller, renderer, inbox)
        });

        group.bench_with_input(BenchmarkId::new("trigger", count), &count, |b, _| {
            b.to_async(&rt).iter(|| async {
                if let Some(pending) = controller.on_trigger(TabId::new(1)).await {
                    let _ = pending.await;
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_renderer_toggle, bench_round_trip);
criterion_main!(benches);
