use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_memory::core::{Round, RoundConfig, RoundSnapshot};
use tui_memory::term::{frame_fingerprint, FrameBuffer, RoundView, Viewport};
use tui_memory::types::{DisplayMode, GridSize, TICK_MS};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

// Single test per binary: the counter is global.
#[test]
fn frame_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let config = RoundConfig::new(GridSize::Large, DisplayMode::Dark).with_seed(3);
    let mut round = Round::new(config).unwrap();
    let mut snap = RoundSnapshot::default();
    round.snapshot_into(&mut snap);
    let view = RoundView::new();
    let vp = Viewport::new(120, 40);
    let mut fb = FrameBuffer::new(vp.width, vp.height);
    view.render_into(&snap, Some(0), vp, &mut fb);

    let allocs = with_alloc_counting(|| {
        for i in 0..64 {
            round.handle_select(i);
            for _ in 0..50 {
                round.advance(TICK_MS);
            }
            round.snapshot_into(&mut snap);
            let _ = frame_fingerprint(&snap, Some(i), vp);
            view.render_into(&snap, Some(i), vp, &mut fb);
        }
    });

    assert_eq!(allocs, 0, "hot path allocated {allocs} times");
    assert!(round.moves() > 0);
}
