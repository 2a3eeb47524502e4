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

use core::fmt;
use core::mem;
use core::ptr;

/// Storage cell of the list: one payload and one forward link. The
/// list owns every cell reachable from its head; the free list owns
/// the rest.
pub(super) struct InternalNode<T> {
    val: T,
    pub(super) fl_node: bool,
    pub(super) nid: usize,
    pub(super) next: *mut InternalNode<T>,
}

/// A handle to a node in the [`LinkedList`](../struct.LinkedList.html).
///
/// This struct wraps a raw pointer to memory but does not implement
/// the `Deref` trait so you cannot dereference that pointer directly.
/// Handles can be used only by methods of the linkedlist that they
/// were obtained from. They can be copied and passed around by value
/// regardless of the lifetime of the linkedlist.
///
/// A handle names a node by identity and not by value: two handles
/// compare equal only if they refer to the same node of the same
/// list, even if other nodes hold an equal payload. Once the node is
/// removed from the list the handle becomes invalid and every method
/// that accepts it reports so, either with `None` or with
/// [`ListError::InvalidNode`](../enum.ListError.html).
pub struct Node<T> {
    pub(super) cid: usize,
    pub(super) nid: usize,
    pub(super) ptr: *mut InternalNode<T>,
}

impl<T> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<T> Copy for Node<T> {}

impl<T> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cid == other.cid && self.nid == other.nid && self.ptr == other.ptr
    }
}

impl<T> Eq for Node<T> {}

impl<T> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("cid", &self.cid)
            .field("nid", &self.nid)
            .field("ptr", &self.ptr)
            .finish()
    }
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self {
            cid: 0,
            nid: 0,
            ptr: ptr::null_mut(),
        }
    }
}

impl<T> InternalNode<T> {
    pub(super) fn new(val: T, nid: usize, next: *mut InternalNode<T>) -> InternalNode<T> {
        InternalNode {
            val,
            fl_node: false,
            nid,
            next,
        }
    }

    pub(super) fn value(&self) -> &T {
        &self.val
    }

    pub(super) fn value_mut(&mut self) -> &mut T {
        &mut self.val
    }

    /// Overwrites the payload in place and returns the old one.
    pub(super) fn set_value(&mut self, val: T) -> T {
        mem::replace(&mut self.val, val)
    }

    pub(super) fn next(&self) -> *mut InternalNode<T> {
        self.next
    }

    pub(super) fn set_next(&mut self, next: *mut InternalNode<T>) {
        self.next = next;
    }

    pub(super) fn into_value(self) -> T {
        self.val
    }
}

impl<T> Node<T> {
    pub(super) fn new(cid: usize, nid: usize, ptr: *mut InternalNode<T>) -> Node<T> {
        Node { cid, nid, ptr }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_clone_is_same_identity() {
        let mut cell = InternalNode::new(5u8, 7, ptr::null_mut());
        let hnd = Node::new(3, 7, &mut cell as *mut InternalNode<u8>);
        let copy = hnd;
        assert_eq!(hnd, copy);
        assert_eq!(hnd.clone(), copy);
    }

    #[test]
    fn test_identity_not_value() {
        let mut a = InternalNode::new(1u8, 1, ptr::null_mut());
        let mut b = InternalNode::new(1u8, 2, ptr::null_mut());
        let ha = Node::new(1, 1, &mut a as *mut InternalNode<u8>);
        let hb = Node::new(1, 2, &mut b as *mut InternalNode<u8>);
        assert_eq!(a.value(), b.value());
        assert_ne!(ha, hb);
    }

    #[test]
    fn test_default() {
        let hnd = Node::<u8>::default();
        assert_eq!(hnd.cid, 0);
        assert!(hnd.ptr.is_null());
    }

    #[test]
    fn test_accessors() {
        let mut tail = InternalNode::new(2u8, 2, ptr::null_mut());
        let mut head = InternalNode::new(1u8, 1, ptr::null_mut());
        assert!(head.next().is_null());

        head.set_next(&mut tail as *mut InternalNode<u8>);
        assert_eq!(head.next(), &mut tail as *mut InternalNode<u8>);

        assert_eq!(head.set_value(10), 1);
        assert_eq!(*head.value(), 10);
        *head.value_mut() += 1;
        assert_eq!(head.into_value(), 11);
    }
}
