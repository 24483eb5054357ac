//! Ring-buffer front end absorbing push-then-pop churn for a compressed
//! backing stack.
//!
//! Ground truth: `buffer_stack/buffer_stack.hpp`. The construction loop
//! frequently pushes a node and pops it again within a handful of steps;
//! routing every such pair through unary encode/decode wastes cycles for no
//! space benefit. A small fixed-capacity window holds the most recent
//! values in the clear; only once it overflows does the oldest entry get
//! folded into the compressed stack behind it.

use std::collections::VecDeque;

use super::telescope::TelescopeStack;
use super::unary::UnaryStack;

/// Backing store a [`BufferedStack`] can spill into once its window fills.
pub trait GapBackedStack {
    fn push(&mut self, value: u64);
    fn pop(&mut self) -> u64;
    fn top(&self) -> u64;
    fn is_empty(&self) -> bool;
}

impl GapBackedStack for UnaryStack {
    fn push(&mut self, value: u64) {
        UnaryStack::push(self, value)
    }
    fn pop(&mut self) -> u64 {
        UnaryStack::pop(self)
    }
    fn top(&self) -> u64 {
        UnaryStack::top(self)
    }
    fn is_empty(&self) -> bool {
        UnaryStack::is_empty(self)
    }
}

impl GapBackedStack for TelescopeStack {
    fn push(&mut self, value: u64) {
        TelescopeStack::push(self, value)
    }
    fn pop(&mut self) -> u64 {
        let top = TelescopeStack::top(self);
        TelescopeStack::pop(self);
        top
    }
    fn top(&self) -> u64 {
        TelescopeStack::top(self)
    }
    fn is_empty(&self) -> bool {
        TelescopeStack::is_empty(self)
    }
}

const DEFAULT_WINDOW: usize = 64;

pub struct BufferedStack<S: GapBackedStack> {
    inner: S,
    window: VecDeque<u64>,
    capacity: usize,
}

impl<S: GapBackedStack> BufferedStack<S> {
    pub fn new(inner: S) -> Self {
        Self::with_capacity(inner, DEFAULT_WINDOW)
    }

    pub fn with_capacity(inner: S, capacity: usize) -> Self {
        BufferedStack {
            inner,
            window: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty() && self.inner.is_empty()
    }

    pub fn push(&mut self, value: u64) {
        self.window.push_back(value);
        if self.window.len() > self.capacity {
            let oldest = self.window.pop_front().expect("window just overflowed");
            self.inner.push(oldest);
        }
    }

    pub fn top(&self) -> u64 {
        match self.window.back() {
            Some(&v) => v,
            None => self.inner.top(),
        }
    }

    pub fn pop(&mut self) -> u64 {
        debug_assert!(!self.is_empty(), "BufferedStack underflow");
        match self.window.pop_back() {
            Some(v) => v,
            None => self.inner.pop(),
        }
    }
}

#[cfg(test)]
mod tests;
