//! Traversal must not touch the heap.
//!
//! A counting allocator records allocations made by the current thread while
//! a measurement is active. Kept to a single test so no other test thread
//! shares the window.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use rustyxml_iter::dom::DocumentBuilder;
use rustyxml_iter::{attribute_range, node_range, AttributeCursor, SiblingCursor};

struct CountingAllocator;

thread_local! {
    static TRACKING: Cell<bool> = const { Cell::new(false) };
    static ALLOCATIONS: Cell<usize> = const { Cell::new(0) };
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if TRACKING.with(Cell::get) {
            ALLOCATIONS.with(|count| count.set(count.get() + 1));
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

fn allocations_during(f: impl FnOnce()) -> usize {
    ALLOCATIONS.with(|count| count.set(0));
    TRACKING.with(|tracking| tracking.set(true));
    f();
    TRACKING.with(|tracking| tracking.set(false));
    ALLOCATIONS.with(Cell::get)
}

#[test]
fn test_traversal_does_not_allocate() {
    let mut b = DocumentBuilder::new();
    b.start_element("r").unwrap();
    for i in 0..64 {
        let name = if i % 3 == 0 { "a" } else { "b" };
        b.empty_element(name, &[("x", "1"), ("y", "2"), ("x", "3")]).unwrap();
    }
    b.end_element("r").unwrap();
    let doc = b.finish().unwrap();
    let root = doc.root().unwrap();

    let mut totals = (0usize, 0usize, 0usize, 0usize);
    let count = allocations_during(|| {
        let mut cursor = SiblingCursor::new(root);
        while cursor != SiblingCursor::default() {
            totals.0 += 1;
            let mut attrs = AttributeCursor::new(cursor.get());
            attrs.advance().advance().retreat();
            totals.1 += attrs.count();
            cursor.advance();
        }
        for child in node_range(root, "a") {
            totals.2 += 1;
            totals.3 += attribute_range(child, "x").into_iter().count();
        }
        totals.2 += node_range(root, "missing").into_iter().count();
    });

    assert_eq!(count, 0);
    assert_eq!(totals, (64, 64 * 2, 22, 44));
}
