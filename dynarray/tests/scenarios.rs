use dynarray::{ArrayError, CapacityFloor, DynamicArray, ResizePolicy};
use itertools::Itertools;
use rstest::rstest;

fn filled(len: i32, capacity: usize) -> DynamicArray<i32> {
    let mut arr = DynamicArray::new(capacity).expect("Capacity is positive");
    arr.extend(1..=len);
    arr
}

#[test]
fn append_past_capacity_grows() {
    let mut arr = filled(3, 3);
    assert_eq!((arr.len(), arr.capacity()), (3, 3));

    arr.append(4);
    assert_eq!((arr.len(), arr.capacity()), (4, 6));
    assert_eq!(arr.get(3), Some(&4));
}

#[test]
fn edit_sequence() {
    let mut arr = filled(4, 3);
    assert!(arr.set(0, 10));
    assert!(arr.insert(1, 99));
    assert_eq!(arr.to_vec(), vec![10, 99, 2, 3, 4]);

    assert_eq!(arr.delete(2), Some(2));
    assert_eq!(arr.to_vec(), vec![10, 99, 3, 4]);
    assert_eq!(arr.len(), 4);
}

#[test]
fn strict_access_fails_where_tolerant_returns_none() {
    let arr = filled(4, 4);

    assert!(matches!(
        arr.get_strict(10),
        Err(ArrayError::OutOfRange { index: 10, len: 4 })
    ));
    assert_eq!(arr.get(10), None);
}

#[test]
fn zero_capacity_is_invalid() {
    let err = DynamicArray::<i32>::new(0).expect_err("Zero capacity should be rejected");
    assert!(matches!(err, ArrayError::InvalidArgument { .. }));
    assert!(!err.is_fatal());
}

// One shrink per deletion: crossing `len < capacity / 4` at len 3 halves
// 16 to 8, and the next crossing at len 1 halves 8 to 4.
#[rstest]
#[case(15, 16)]
#[case(4, 16)]
#[case(3, 8)]
#[case(2, 8)]
#[case(1, 4)]
#[case(0, 4)]
fn draining_shrinks_by_quarter_threshold(#[case] down_to: usize, #[case] capacity: usize) {
    let mut arr = filled(16, 16);
    while arr.len() > down_to {
        arr.delete(0);
    }

    assert_eq!(arr.capacity(), capacity);
    assert_eq!(
        arr.iter().copied().collect_vec(),
        (17 - down_to as i32..=16).collect_vec()
    );
}

// Capacities that aren't multiples of four shrink as soon as the size drops
// below the exact quarter, not its rounded-down value.
#[rstest]
#[case(3, 4, 1, 3)]
#[case(5, 6, 2, 5)]
#[case(5, 6, 1, 2)]
fn uneven_capacity_shrinks_below_exact_quarter(
    #[case] initial: usize,
    #[case] filled_to: i32,
    #[case] down_to: usize,
    #[case] capacity: usize,
) {
    let mut arr = filled(filled_to, initial);
    assert_eq!(arr.capacity(), initial * 2);

    while arr.len() > down_to {
        arr.delete(0);
    }

    assert_eq!(arr.capacity(), capacity);
    assert_eq!(
        arr.iter().copied().collect_vec(),
        (filled_to - down_to as i32 + 1..=filled_to).collect_vec()
    );
}

#[rstest]
#[case(1, 10_000)]
#[case(3, 10_000)]
#[case(7, 1_000)]
#[case(64, 10)]
fn append_moves_are_linear(#[case] capacity: usize, #[case] count: i32) {
    let arr = filled(count, capacity);
    let stats = arr.stats();

    assert_eq!(arr.len(), count as usize);
    assert!(
        stats.moved <= 2 * count as usize,
        "{} appends moved {} elements",
        count,
        stats.moved
    );
    assert_eq!(stats.shrinks, 0);
}

#[test]
fn no_thrashing_after_shrink() {
    let mut arr = filled(16, 16);
    while arr.len() > 3 {
        arr.delete(0);
    }
    let after_shrink = arr.stats();
    assert_eq!(after_shrink.shrinks, 1);
    assert_eq!(arr.capacity(), 8);

    for i in 0..100 {
        arr.append(i);
        arr.delete(0);
    }
    assert_eq!(arr.stats(), after_shrink);

    arr.delete(0);
    assert_eq!(arr.stats().grows, after_shrink.grows);
}

#[test]
fn initial_floor_keeps_capacity() {
    let policy = ResizePolicy {
        floor: CapacityFloor::Initial,
        ..Default::default()
    };
    let mut arr = DynamicArray::with_policy(16, policy).expect("Valid policy");
    arr.extend(0..64);
    assert_eq!(arr.capacity(), 64);

    while arr.len() > 1 {
        arr.pop();
    }
    assert_eq!(arr.capacity(), 16);
}

#[test]
fn custom_growth_factor() {
    let policy = ResizePolicy {
        growth_factor: 3,
        shrink_threshold: 9,
        shrink_divisor: 3,
        ..Default::default()
    };
    let mut arr = DynamicArray::with_policy(2, policy).expect("Valid policy");
    arr.extend(0..7);
    assert_eq!(arr.capacity(), 18);

    while arr.len() > 1 {
        arr.pop();
    }
    assert_eq!(arr.capacity(), 6);
}

#[test]
fn invalid_policy_is_rejected() {
    let policy = ResizePolicy {
        shrink_threshold: 2,
        ..Default::default()
    };
    assert!(matches!(
        DynamicArray::<u8>::with_policy(4, policy),
        Err(ArrayError::InvalidArgument { .. })
    ));
}

#[test]
fn clone_is_deep() {
    let original = filled(3, 4);
    let mut copy = original.clone();
    copy.set(0, 100);
    copy.append(4);

    assert_eq!(original.to_vec(), vec![1, 2, 3]);
    assert_eq!(copy.to_vec(), vec![100, 2, 3, 4]);
    assert_eq!(original.capacity(), 4);
}
