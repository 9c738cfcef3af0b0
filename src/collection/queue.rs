use std::collections::VecDeque;

/// FIFO queue ADT.
pub trait Queue<T> {
    /// Adds an element to the tail.
    fn push(&mut self, element: T);

    /// Removes the head, `None` when the queue is empty.
    fn pop(&mut self) -> Option<T>;

    fn size(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

#[derive(Debug, Clone)]
pub struct SliceQueue<T> {
    que: VecDeque<T>,
}

impl<T> Default for SliceQueue<T> {
    fn default() -> Self {
        Self { que: VecDeque::new() }
    }
}

impl<T> SliceQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> Queue<T> for SliceQueue<T> {
    #[inline]
    fn push(&mut self, element: T) {
        self.que.push_back(element);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.que.pop_front()
    }

    #[inline]
    fn size(&self) -> usize {
        self.que.len()
    }
}
