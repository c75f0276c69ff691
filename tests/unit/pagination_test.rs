// Property-based tests for page arithmetic
//
// Pages are zero-based and tile the result set: consecutive pages are
// adjacent and never overlap.

use onlinestore::core::PageRequest;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_consecutive_pages_are_adjacent(number in 0u32..1_000_000, size in 1u32..=100) {
        let current = PageRequest::new(number, size);
        let next = PageRequest::new(number + 1, size);

        prop_assert_eq!(current.offset() + current.limit(), next.offset());
    }

    #[test]
    fn test_offset_never_overflows(number in any::<u32>(), size in any::<u32>()) {
        let page = PageRequest::new(number, size);

        prop_assert_eq!(page.offset(), u64::from(number) * u64::from(size));
    }

    #[test]
    fn test_slicing_by_pages_covers_every_item(total in 0usize..200, size in 1u32..=20) {
        let items: Vec<usize> = (0..total).collect();
        let mut seen = Vec::new();
        let mut number = 0u32;

        loop {
            let page = PageRequest::new(number, size);
            let chunk: Vec<usize> = items
                .iter()
                .copied()
                .skip(page.offset() as usize)
                .take(page.limit() as usize)
                .collect();
            if chunk.is_empty() {
                break;
            }
            prop_assert!(chunk.len() <= size as usize);
            seen.extend(chunk);
            number += 1;
        }

        prop_assert_eq!(seen, items);
    }
}
