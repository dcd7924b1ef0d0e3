// Integration tests for the buffer-backed collections
// Exercises the public API only, as a downstream crate would

use stackonly_collections::{
    BoundedCapacity, Error, ExpandableArray, ExpandableDictionary, ExpandableQueue,
    ExpandableStack, FixedDictionary, FixedQueue, FixedStack, Result,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Point {
    x: i32,
    y: i32,
}

#[test]
fn test_push_count_matches_successful_pushes() {
    let mut buffer = [0u32; 4];
    let mut stack = FixedStack::new(&mut buffer);

    let accepted = (0..6).filter(|&value| stack.push(value)).count();

    assert_eq!(accepted, 4);
    assert_eq!(stack.len(), 4);
    assert!(!stack.push(99));
    assert_eq!(stack.len(), 4);
}

#[test]
fn test_stack_lifo_law() -> Result<()> {
    let mut buffer = [Point::default(); 2];
    let mut stack = FixedStack::new(&mut buffer);
    let a = Point { x: 1, y: 2 };
    let b = Point { x: 3, y: 4 };

    assert!(stack.push(a));
    assert!(stack.push(b));

    assert_eq!(*stack.pop()?, b);
    assert_eq!(*stack.pop()?, a);
    Ok(())
}

#[test]
fn test_queue_fifo_with_wraparound() -> Result<()> {
    let mut fixed_buffer = [Point::default(); 1];
    let mut arena_buffer = [Point::default(); 1];
    let mut fixed = FixedQueue::new(&mut fixed_buffer);
    let mut expandable: ExpandableQueue<'_, Point> = ExpandableQueue::new(&mut arena_buffer);

    for i in 0..20 {
        let expected = Point { x: i, y: i };

        assert!(fixed.enqueue(expected));
        assert!(expandable.enqueue(expected));

        assert_eq!(*fixed.dequeue()?, expected);
        assert_eq!(*expandable.dequeue()?, expected);
        assert_eq!(fixed.len(), 0);
        assert_eq!(expandable.len(), 0);
    }
    Ok(())
}

#[test]
fn test_dictionary_round_trip() -> Result<()> {
    let mut keys = [0u32; 3];
    let mut values = [Point::default(); 3];
    let mut dict = FixedDictionary::new(&mut keys, &mut values);
    let v = Point { x: 7, y: 8 };

    assert!(dict.try_add(1, v));
    assert!(dict.try_add(2, Point { x: 9, y: 9 }));
    assert_eq!(*dict.get_value_ref(&1)?, v);

    assert!(dict.try_remove(&1));
    assert_eq!(dict.try_get_value(&1), None);
    assert_eq!(*dict.get_value_ref(&2)?, Point { x: 9, y: 9 });
    Ok(())
}

#[test]
fn test_expansion_preserves_elements() -> Result<()> {
    let mut first = [0u64; 1];
    let mut second = [0u64; 1];
    let mut stack: ExpandableStack<'_, u64> = ExpandableStack::new(&mut first);

    assert!(stack.push(10));
    assert!(!stack.push(20));

    stack.expand(&mut second)?;
    assert!(stack.push(20));
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.capacity(), 2);
    assert_eq!(stack[0], 10);
    assert_eq!(stack[1], 20);
    Ok(())
}

#[test]
fn test_expansion_of_every_container() -> Result<()> {
    let (mut q1, mut q2) = ([0u8; 1], [0u8; 1]);
    let (mut k1, mut v1, mut k2, mut v2) = ([0u8; 1], [0u8; 1], [0u8; 1], [0u8; 1]);

    let mut queue: ExpandableQueue<'_, u8> = ExpandableQueue::new(&mut q1);
    assert!(queue.enqueue(1));
    queue.expand(&mut q2)?;
    assert!(queue.enqueue(2));
    assert_eq!((queue.len(), queue.capacity()), (2, 2));

    let mut dict: ExpandableDictionary<'_, u8, u8> = ExpandableDictionary::new(&mut k1, &mut v1);
    assert!(dict.try_add(1, 1));
    dict.expand(&mut k2, &mut v2)?;
    assert!(dict.try_add(2, 2));
    assert_eq!((dict.len(), dict.capacity()), (2, 2));
    Ok(())
}

#[test]
fn test_mutation_through_references_is_visible() -> Result<()> {
    let mut keys = [0u8; 1];
    let mut values = [Point::default(); 1];
    let mut dict = FixedDictionary::new(&mut keys, &mut values);
    assert!(dict.try_add(1, Point { x: 3, y: 1 }));

    dict.get_value_ref(&1)?.x = 15;
    assert_eq!(dict[&1].x, 15);

    let mut buffer = [Point::default(); 2];
    let mut queue = FixedQueue::new(&mut buffer);
    assert!(queue.enqueue(Point { x: 3, y: 1 }));
    queue.peek()?.y = 42;
    assert_eq!(queue[0].y, 42);
    Ok(())
}

#[test]
fn test_failure_kinds() {
    let mut buffer = [0u8; 1];
    let array: ExpandableArray<'_, u8> = ExpandableArray::new(&mut buffer);
    let error = array.get(1).err();
    assert_eq!(error, Some(Error::INDEX_OUT_OF_RANGE));
    assert!(error.is_some_and(|e| e.is_out_of_range()));

    let mut buffer = [0u8; 1];
    let mut stack = FixedStack::new(&mut buffer);
    assert!(stack.pop().is_err_and(|e| e.is_invalid_operation()));

    let mut buffer = [0u8; 1];
    let mut queue: ExpandableQueue<'_, u8> = ExpandableQueue::new(&mut buffer);
    assert!(queue.dequeue().is_err_and(|e| e.is_invalid_operation()));

    let mut keys = [0u8; 1];
    let mut values = [0u8; 1];
    let mut dict = FixedDictionary::new(&mut keys, &mut values);
    assert!(dict.get_value_ref(&3).is_err_and(|e| e.is_key_not_found()));
}

#[test]
fn test_clear_reuses_slots_from_start() -> Result<()> {
    let mut buffer = [0u32; 3];
    let mut queue = FixedQueue::new(&mut buffer);
    assert!(queue.enqueue(1));
    assert!(queue.enqueue(2));
    assert_eq!(*queue.dequeue()?, 1);

    queue.clear();
    assert_eq!(queue.len(), 0);
    assert!(queue.enqueue(5));
    assert_eq!(queue.buffer()[0], 5);

    let mut buffer = [0u32; 3];
    let mut stack = FixedStack::new(&mut buffer);
    assert!(stack.push(1));
    assert!(stack.push(2));
    stack.clear();
    assert!(stack.push(5));
    assert_eq!(stack.buffer()[0], 5);
    Ok(())
}

#[test]
fn test_writes_land_in_caller_buffers() -> Result<()> {
    let mut first = [0u32; 2];
    let mut second = [0u32; 2];
    {
        let mut stack: ExpandableStack<'_, u32> = ExpandableStack::new(&mut first);
        stack.expand(&mut second)?;
        for value in 1..=4 {
            assert!(stack.push(value));
        }
    }
    assert_eq!(first, [1, 2]);
    assert_eq!(second, [3, 4]);
    Ok(())
}

#[test]
fn test_bounded_capacity_is_uniform() {
    fn remaining(container: &dyn BoundedCapacity) -> usize {
        container.remaining_capacity()
    }

    let mut a = [0u8; 3];
    let mut b = [0u8; 5];
    let mut stack = FixedStack::new(&mut a);
    let queue: ExpandableQueue<'_, u8> = ExpandableQueue::new(&mut b);
    assert!(stack.push(1));

    assert_eq!(remaining(&stack), 2);
    assert_eq!(remaining(&queue), 5);
}
