// File: crates/gyro-dash/tests/window.rs
// Purpose: Windowing bounds and navigation semantics.

use gyro_dash::{Navigation, NavigationMode, Window};

#[test]
fn window_never_exceeds_request_or_bounds() {
    for dataset_len in 0..40usize {
        for sample_count in 0..50usize {
            for prev in 0..3u64 {
                for next in 0..3u64 {
                    let nav = Navigation::new(prev, next);
                    for mode in [NavigationMode::Literal, NavigationMode::Cursor] {
                        let w = Window::compute_with(mode, sample_count, nav, dataset_len);
                        assert!(w.len <= sample_count.min(dataset_len), "{w:?} len={dataset_len} n={sample_count}");
                        assert!(w.end() <= dataset_len, "{w:?} len={dataset_len} n={sample_count}");
                    }
                }
            }
        }
    }
}

#[test]
fn no_clicks_starts_at_zero() {
    let w = Window::compute(10, Navigation::new(0, 0), 100);
    assert_eq!(w.range(), 0..10);
}

#[test]
fn next_click_moves_one_page() {
    let w = Window::compute(10, Navigation::new(0, 1), 100);
    assert_eq!(w.range(), 10..20);
}

#[test]
fn next_and_prev_cancel() {
    let w = Window::compute(10, Navigation::new(1, 1), 100);
    assert_eq!(w.range(), 0..10);
}

#[test]
fn repeated_clicks_have_no_extra_effect_in_literal_mode() {
    assert_eq!(Window::compute(10, Navigation::new(0, 5), 100).range(), 10..20);
    assert_eq!(Window::compute(10, Navigation::new(7, 0), 100).range(), 0..10);
    assert_eq!(Window::compute(10, Navigation::new(4, 9), 100).range(), 0..10);
}

#[test]
fn next_is_clamped_to_last_full_page() {
    let w = Window::compute(10, Navigation::new(0, 1), 15);
    assert_eq!(w.range(), 5..15);
}

#[test]
fn sample_count_is_clamped_to_dataset() {
    let w = Window::compute(500, Navigation::new(0, 1), 42);
    assert_eq!(w.range(), 0..42);
}

#[test]
fn empty_dataset_gives_empty_window() {
    let w = Window::compute(100, Navigation::new(3, 3), 0);
    assert!(w.is_empty());
    assert_eq!(w.range(), 0..0);
}

#[test]
fn cursor_mode_accumulates_clicks() {
    let w = Window::compute_cursor(10, Navigation::new(1, 3), 100);
    assert_eq!(w.range(), 20..30);
    let w = Window::compute_cursor(10, Navigation::new(0, 50), 100);
    assert_eq!(w.range(), 90..100);
    let w = Window::compute_cursor(10, Navigation::new(6, 2), 100);
    assert_eq!(w.range(), 0..10);
}

#[test]
fn cursor_mode_handles_extreme_counts() {
    let w = Window::compute_cursor(usize::MAX, Navigation::new(0, u64::MAX), usize::MAX);
    assert_eq!((w.start, w.len), (0, usize::MAX));
    let w = Window::compute_cursor(usize::MAX, Navigation::new(u64::MAX, 0), usize::MAX);
    assert_eq!(w.start, 0);
    let w = Window::compute_cursor(1 << 40, Navigation::new(0, u64::MAX), 1 << 41);
    assert_eq!(w.range(), (1 << 40)..(1 << 41));
}

#[test]
fn navigation_mode_parses() {
    assert_eq!("cursor".parse::<NavigationMode>(), Ok(NavigationMode::Cursor));
    assert_eq!("Literal".parse::<NavigationMode>(), Ok(NavigationMode::Literal));
    assert!("sideways".parse::<NavigationMode>().is_err());
}
