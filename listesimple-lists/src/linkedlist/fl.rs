/*
   Simple Linked List: A singly linked list whose nodes can be
   matched by value, relinked in place, reversed and swapped by
   handle without moving their payloads.

   Copyright 2021 "Rahul Singh <rsingh@arrsingh.com>"

   Licensed under the Apache License, Version 2.0 (the "License");
   you may not use this file except in compliance with the License.
   You may obtain a copy of the License at

       http://www.apache.org/licenses/LICENSE-2.0

   Unless required by applicable law or agreed to in writing, software
   distributed under the License is distributed on an "AS IS" BASIS,
   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
   See the License for the specific language governing permissions and
   limitations under the License.
*/
use crate::linkedlist::node::InternalNode;
extern crate alloc;

use alloc::{alloc::alloc, alloc::dealloc, alloc::handle_alloc_error, alloc::Layout};
use core::ptr;
use tracing::debug;

/// Pool of node memory. Free cells are chained through their `next`
/// link and handed out in the order they were released so that a
/// freshly released slot is the last one to be reused.
#[derive(Debug)]
pub(super) struct FreeList<T> {
    capacity: usize,
    len: usize,
    head: *mut InternalNode<T>,
    tail: *mut InternalNode<T>,
}

impl<T> Drop for FreeList<T> {
    fn drop(&mut self) {
        let layout = Layout::new::<InternalNode<T>>();
        let mut cur = self.pop_head();
        while !cur.is_null() {
            // cells on the free list never hold a live payload
            unsafe {
                dealloc(cur as *mut u8, layout);
            }
            cur = self.pop_head();
        }
    }
}

impl<T> FreeList<T> {
    pub(super) fn new(capacity: usize) -> FreeList<T> {
        let mut fl = FreeList {
            capacity,
            len: 0,
            head: ptr::null_mut(),
            tail: ptr::null_mut(),
        };
        fl.alloc(capacity);
        fl
    }

    pub(super) fn len(&self) -> usize {
        self.len
    }

    fn alloc(&mut self, size: usize) {
        let layout = Layout::new::<InternalNode<T>>();

        let mut count: usize = 0;
        while count < size {
            let ptr = unsafe { alloc(layout) as *mut InternalNode<T> };
            if ptr.is_null() {
                handle_alloc_error(layout);
            }
            self.push_tail(ptr);
            count += 1;
        }
    }

    fn push_tail(&mut self, ptr: *mut InternalNode<T>) {
        unsafe {
            // the cell may be uninitialized so only write through
            // raw field pointers
            ptr::addr_of_mut!((*ptr).next).write(ptr::null_mut());
            ptr::addr_of_mut!((*ptr).fl_node).write(true);
            if self.tail.is_null() {
                self.head = ptr;
            } else {
                (*self.tail).next = ptr;
            }
        }
        self.tail = ptr;
        self.len += 1;
    }

    fn pop_head(&mut self) -> *mut InternalNode<T> {
        if self.head.is_null() {
            return ptr::null_mut();
        }
        let ptr = self.head;
        unsafe {
            self.head = (*ptr).next;
            (*ptr).next = ptr::null_mut();
        }
        if self.head.is_null() {
            self.tail = ptr::null_mut();
        }
        self.len -= 1;
        ptr
    }

    /// Moves the payload out of the cell and returns the cell to the
    /// pool. The caller must have unlinked the cell from the list.
    pub(super) fn release(&mut self, ptr: *mut InternalNode<T>) -> T {
        let node = unsafe { ptr::read(ptr) };
        self.push_tail(ptr);
        node.into_value()
    }

    pub(super) fn acquire(
        &mut self,
        val: T,
        nid: usize,
        next: *mut InternalNode<T>,
    ) -> *mut InternalNode<T> {
        let mut ptr = self.pop_head();
        if ptr.is_null() {
            self.grow();
            ptr = self.pop_head();
            if ptr.is_null() {
                panic!("alloc failed on acquire");
            }
        }

        let node = InternalNode::new(val, nid, next);
        unsafe {
            ptr::write(ptr, node);
        }
        ptr
    }

    fn grow(&mut self) {
        if self.capacity == 0 {
            self.alloc(1);
        } else {
            self.alloc(self.capacity);
            self.capacity *= 2;
        }
        debug!(capacity = self.capacity, free = self.len, "grew node pool");
    }
}
