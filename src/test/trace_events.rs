use crate::trace::{BLOCKSIZE, Event};

#[test]
fn block_range_covers_whole_pages() {
    let ev = Event::hint(0, 32768, "0.001");
    assert_eq!(ev.first_block(), 0);
    assert_eq!(ev.last_block(), 3);
    assert_eq!(ev.block_count(), 4);

    let ev = Event::read("pread", BLOCKSIZE, BLOCKSIZE, "0.001");
    assert_eq!(ev.first_block(), 1);
    assert_eq!(ev.last_block(), 1);
    assert_eq!(ev.block_count(), 1);
}

#[test]
fn block_count_is_positive_for_page_aligned_reads() {
    for blocks in 1..=16u64 {
        for start in [0u64, 7, 1000] {
            let ev = Event::read("pread", start * BLOCKSIZE, blocks * BLOCKSIZE, "0");
            assert_eq!(ev.first_block(), start as i64);
            assert_eq!(ev.last_block(), (start + blocks) as i64 - 1);
            assert_eq!(ev.block_count(), blocks as i64);
        }
    }
}

#[test]
fn block_math_uses_floor_division() {
    let ev = Event::read("pread", 100_000, 50, "0");
    assert_eq!(ev.first_block(), 12);
    assert_eq!(ev.last_block(), 100_050 / 8192 - 1);
    assert_eq!(ev.end(), 100_050);
}

#[test]
fn syscall_names_for_display() {
    assert_eq!(Event::hint(0, 1, "0").syscall(), "fadvise");
    assert_eq!(Event::read("preadv", 0, 1, "0").syscall(), "preadv");
    assert!(Event::read("pread", 0, 1, "0").is_read());
    assert!(!Event::hint(0, 1, "0").is_read());
}
