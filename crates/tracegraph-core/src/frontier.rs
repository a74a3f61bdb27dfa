//! Frontier containers for ordering node expansion
//!
//! `Queue` drives breadth-first order, `Stack` drives depth-first order. Both
//! are unbounded and meant for single-threaded use inside one algorithm call.

use std::collections::VecDeque;

/// Ordered collection of pending items awaiting expansion
pub trait Frontier<T> {
    fn push(&mut self, item: T);
    /// Remove the item that should be expanded next
    fn take_next(&mut self) -> Option<T>;
    fn is_empty(&self) -> bool;
}

/// FIFO container
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Append an item at the back
    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove the earliest pushed item. Popping an empty queue is a no-op.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Peek at the earliest pushed item
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Peek at the most recently pushed item
    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Queue<T> {
    fn push(&mut self, item: T) {
        Queue::push(self, item);
    }

    fn take_next(&mut self) -> Option<T> {
        self.pop()
    }

    fn is_empty(&self) -> bool {
        Queue::is_empty(self)
    }
}

/// LIFO container
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove the most recently pushed item. Popping an empty stack is a no-op.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Peek at the most recently pushed item
    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Stack<T> {
    fn push(&mut self, item: T) {
        Stack::push(self, item);
    }

    fn take_next(&mut self) -> Option<T> {
        self.pop()
    }

    fn is_empty(&self) -> bool {
        Stack::is_empty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_fifo_order() {
        let mut queue = Queue::new();
        queue.push(1);
        queue.push(2);
        queue.push(3);

        assert_eq!(queue.front(), Some(&1));
        assert_eq!(queue.back(), Some(&3));
        assert_eq!(queue.len(), 3);

        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.front(), Some(&2));
        assert_eq!(queue.pop(), Some(2));
        assert_eq!(queue.pop(), Some(3));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_queue_empty_peeks_and_pop() {
        let mut queue: Queue<u32> = Queue::default();
        assert!(queue.front().is_none());
        assert!(queue.back().is_none());
        assert!(queue.pop().is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_stack_lifo_order() {
        let mut stack = Stack::new();
        stack.push('a');
        stack.push('b');
        stack.push('c');

        assert_eq!(stack.top(), Some(&'c'));
        assert_eq!(stack.pop(), Some('c'));
        assert_eq!(stack.top(), Some(&'b'));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop(), Some('b'));
        assert_eq!(stack.pop(), Some('a'));
        assert!(stack.is_empty());
        assert!(stack.top().is_none());
        assert!(stack.pop().is_none());
    }

    #[test]
    fn test_frontier_trait_dispatch() {
        fn drain<F: Frontier<u8>>(mut frontier: F) -> Vec<u8> {
            for item in [1, 2, 3] {
                frontier.push(item);
            }
            let mut out = Vec::new();
            while let Some(item) = frontier.take_next() {
                out.push(item);
            }
            out
        }

        assert_eq!(drain(Queue::new()), vec![1, 2, 3]);
        assert_eq!(drain(Stack::new()), vec![3, 2, 1]);
    }
}
