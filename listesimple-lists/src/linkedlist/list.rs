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

use crate::linkedlist::{
    error::ListError, fl, iter::Iter, iter::IterMut, node::InternalNode, node::Node,
};
use core::fmt;
use core::ptr;
use core::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, trace};

macro_rules! nid_inc {
    ($nid: expr) => {{
        let nid = $nid;
        $nid += 1;
        nid
    }};
}

/// A singly linked list that owns its nodes and draws them from a
/// pre-allocated pool. Elements are pushed at the head and found,
/// replaced or removed by comparing payloads for equality. Individual
/// nodes are addressed by [`Node`](../node/struct.Node.html) handles
/// which name a node by identity, so two nodes holding equal payloads
/// can still be told apart and swapped.
///
/// Every mutation keeps one invariant: following `next` links from the
/// head visits exactly [`len()`](#method.len) nodes and ends at the
/// null link, without ever revisiting a node.
///
/// # Getting Started
///
/// ```
/// use listesimple::lists::LinkedList;
///
/// let mut list = LinkedList::<u8>::with_capacity(10);
/// for i in 0..4 {
///     list.push_front(i);
/// }
/// assert_eq!(list.to_string(), "ListeSimple(3, 2, 1, 0)");
///
/// list.reverse();
/// assert_eq!(list.to_string(), "ListeSimple(0, 1, 2, 3)");
///
/// let first = list.head_node().unwrap();
/// let last = list.find(&3).unwrap();
/// list.swap_nodes(&first, &last).unwrap();
/// assert_eq!(list.to_string(), "ListeSimple(3, 1, 2, 0)");
/// ```
pub struct LinkedList<T> {
    cid: usize,
    nid: usize,
    pub(super) head: *mut InternalNode<T>,
    len: usize,
    fl: fl::FreeList<T>,
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ListeSimple(")?;
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for val in iter {
                write!(f, ", {}", val)?;
            }
        }
        f.write_str(")")
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

static LL_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn inc_cid() -> usize {
    LL_COUNTER.fetch_add(1, Ordering::Relaxed) + 1
}

impl<T> LinkedList<T> {
    /// Creates an empty linked list with a default capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use listesimple::lists::LinkedList;
    /// let list = LinkedList::<u8>::new();
    /// assert_eq!(list.capacity(), 8);
    /// ```
    pub fn new() -> LinkedList<T> {
        LinkedList::with_capacity(8)
    }

    /// Creates an empty linked list with the specified capacity. The
    /// list will continue to reallocate additional memory by doubling
    /// the capacity everytime the capacity is exceeded.
    ///
    /// However the list will not deallocate memory when elements are
    /// removed.
    ///
    /// If the capacity is set to 0, and the list is full, then new
    /// memory will be allocated for one new element everytime an
    /// element is added to the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use listesimple::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::with_capacity(10);
    /// for i in 0..10 {
    ///     // All these are pushed without any allocations
    ///     list.push_front(i);
    /// }
    ///
    /// assert_eq!(list.len(), 10);
    /// assert_eq!(list.capacity(), 10);
    ///
    /// // This will result in an allocation and the capacity will be doubled
    /// list.push_front(1);
    /// assert_eq!(list.len(), 11);
    /// assert_eq!(list.capacity(), 20);
    /// ```
    pub fn with_capacity(capacity: usize) -> LinkedList<T> {
        LinkedList {
            cid: inc_cid(),
            nid: 0,
            len: 0,
            head: ptr::null_mut(),
            fl: fl::FreeList::new(capacity),
        }
    }

    /// Returns an iterator over the list from head to tail.
    ///
    /// # Examples
    /// ```
    /// use listesimple::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// list.push_front(1);
    /// list.push_front(2);
    /// list.push_front(3);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&3));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<T> {
        Iter::new(self)
    }

    /// Returns an iterator over the list with mutable references
    /// that allows the values to be modified.
    ///
    /// # Examples
    /// ```
    /// use listesimple::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// list.push_front(1);
    /// list.push_front(2);
    ///
    /// for e in list.iter_mut() {
    ///     *e += 100;
    /// }
    /// assert_eq!(list.to_string(), "ListeSimple(102, 101)");
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<T> {
        IterMut::new(self)
    }

    /// Removes and drops all the elements from this list. This has no
    /// effect on the allocated capacity of the list.
    ///
    /// This method should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use listesimple::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::with_capacity(10);
    /// list.push_front(1);
    /// list.push_front(2);
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.capacity(), 10);
    /// ```
    pub fn clear(&mut self) {
        while self.pop_head().is_some() {}
    }

    /// Returns a reference to the front (head) of the list or `None`
    /// if the list is empty. This method simply calls
    /// [`self.head()`](#method.head)
    ///
    /// # Examples
    /// ```
    /// use listesimple::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn front(&self) -> Option<&T> {
        self.head()
    }

    /// Returns a mutable reference to the front (head) of the list or
    /// `None` if the list is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.head.is_null() {
            return None;
        }
        unsafe { Some((*self.head).value_mut()) }
    }

    /// Returns a reference to the head of the list or `None` if the
    /// list is empty.
    ///
    /// This method should complete in *O*(*1*) time.
    pub fn head(&self) -> Option<&T> {
        if self.head.is_null() {
            return None;
        }
        unsafe { Some((*self.head).value()) }
    }

    /// Returns a handle to the head of the list or `None` if the list
    /// is empty.
    ///
    /// # Examples
    /// ```
    /// use listesimple::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// assert_eq!(list.head_node(), None);
    ///
    /// let node = list.push_head(1);
    /// assert_eq!(list.head_node(), Some(node));
    /// ```
    pub fn head_node(&self) -> Option<Node<T>> {
        if self.head.is_null() {
            return None;
        }
        Some(self.handle(self.head))
    }

    /// Returns a handle to the node immediately after the node
    /// associated with the specified handle. If the specified handle
    /// is invalid or there is no next node, this method returns None.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use listesimple::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// let second = list.push_head(2);
    /// let first = list.push_head(1);
    ///
    /// assert_eq!(list.next_node(&first), Some(second));
    /// assert_eq!(list.next_node(&second), None);
    /// ```
    pub fn next_node(&self, node: &Node<T>) -> Option<Node<T>> {
        let n_ptr = self.node_ptr(node)?;
        let next = unsafe { (*n_ptr).next() };
        if next.is_null() {
            return None;
        }
        Some(self.handle(next))
    }

    /// Returns a reference to the value of the node associated with
    /// the specified handle or `None` if the handle is invalid.
    ///
    /// # Examples
    /// ```
    /// use listesimple::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// let node = list.push_head(1);
    /// assert_eq!(list.node(&node), Some(&1));
    ///
    /// list.pop_front();
    /// assert_eq!(list.node(&node), None);
    /// ```
    pub fn node(&self, node: &Node<T>) -> Option<&T> {
        let n_ptr = self.node_ptr(node)?;
        unsafe { Some((*n_ptr).value()) }
    }

    /// Returns a mutable reference to the value of the node
    /// associated with the specified handle or `None` if the handle
    /// is invalid.
    pub fn node_mut(&mut self, node: &Node<T>) -> Option<&mut T> {
        let n_ptr = self.node_ptr(node)?;
        unsafe { Some((*n_ptr).value_mut()) }
    }

    /// Overwrites the value of the node associated with the specified
    /// handle and returns the previous value. The node keeps its
    /// position in the list. If the handle is invalid the value is
    /// dropped and `None` is returned.
    ///
    /// # Examples
    /// ```
    /// use listesimple::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// let node = list.push_head(1);
    /// assert_eq!(list.set_value(&node, 5), Some(1));
    /// assert_eq!(list.node(&node), Some(&5));
    /// ```
    pub fn set_value(&mut self, node: &Node<T>, val: T) -> Option<T> {
        let n_ptr = self.node_ptr(node)?;
        unsafe { Some((*n_ptr).set_value(val)) }
    }

    /// Returns `true` if the specified node has a successor, `false`
    /// if it is the last node and `None` if the handle is invalid.
    pub fn has_next(&self, node: &Node<T>) -> Option<bool> {
        let n_ptr = self.node_ptr(node)?;
        unsafe { Some(!(*n_ptr).next().is_null()) }
    }

    /// Returns `true` if the specified node is the head of the list
    /// and `false` if its not. If the specified node is invalid, then
    /// this method returns `None`
    ///
    /// # Examples
    /// ```
    /// use listesimple::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// let hnd0 = list.push_head(0);
    /// let hnd1 = list.push_head(1);
    /// assert_eq!(list.is_head(&hnd1), Some(true));
    /// assert_eq!(list.is_head(&hnd0), Some(false));
    /// list.pop_front();
    /// assert_eq!(list.is_head(&hnd1), None);
    /// ```
    pub fn is_head(&self, node: &Node<T>) -> Option<bool> {
        let n_ptr = self.node_ptr(node)?;
        Some(n_ptr == self.head)
    }

    /// Returns true if the list is empty and false otherwise.
    pub fn is_empty(&self) -> bool {
        self.head.is_null()
    }

    /// Returns the number of elements the list can hold without
    /// allocating memory for new nodes.
    ///
    /// # Examples
    /// ```
    /// use listesimple::lists::LinkedList;
    /// let list = LinkedList::<u8>::with_capacity(10);
    /// assert_eq!(list.capacity(), 10);
    /// ```
    pub fn capacity(&self) -> usize {
        self.len() + self.fl.len()
    }

    /// Returns the number of elements in the list
    ///
    /// This method should complete in *O*(*1*) time.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of elements in the list as a `u64`.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use listesimple::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// assert_eq!(list.size(), 0);
    ///
    /// list.push_front(1);
    /// list.push_front(1);
    /// assert_eq!(list.size(), 2);
    /// ```
    pub fn size(&self) -> u64 {
        self.len as u64
    }

    /// Adds an element to the front (head) of the list. This method
    /// simply calls [`self.push_head()`](#method.push_head)
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use listesimple::lists::LinkedList;
    /// let mut list = LinkedList::<char>::new();
    /// list.push_front('a');
    /// list.push_front('b');
    /// list.push_front('c');
    /// assert_eq!(list.to_string(), "ListeSimple(c, b, a)");
    /// ```
    pub fn push_front(&mut self, elem: T) {
        self.push_head(elem);
    }

    /// Adds an element at the head of the list and returns a handle
    /// to the new node. The former head becomes its successor.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use listesimple::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// let node = list.push_head(1);
    /// assert_eq!(list.node(&node), Some(&1));
    /// assert_eq!(list.is_head(&node), Some(true));
    /// ```
    pub fn push_head(&mut self, elem: T) -> Node<T> {
        let nid = nid_inc!(self.nid);
        let raw_n = self.fl.acquire(elem, nid, self.head);
        self.head = raw_n;
        self.len += 1;
        trace!(nid, len = self.len, "pushed head node");
        Node::new(self.cid, nid, raw_n)
    }

    /// Removes and returns the value at the front (head) of the list
    /// or `None` if the list is empty. This method simply calls
    /// [`self.pop_head()`](#method.pop_head)
    pub fn pop_front(&mut self) -> Option<T> {
        self.pop_head()
    }

    /// Removes and returns the value at the head of the list or
    /// `None` if the list is empty. Handles to the removed node
    /// become invalid.
    ///
    /// This operation should complete in *O*(*1*) time
    ///
    /// # Examples
    /// ```
    /// use listesimple::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// assert_eq!(list.pop_head(), None);
    ///
    /// list.push_head(1);
    /// list.push_head(2);
    /// assert_eq!(list.pop_head(), Some(2));
    /// assert_eq!(list.pop_head(), Some(1));
    /// assert_eq!(list.pop_head(), None);
    /// ```
    pub fn pop_head(&mut self) -> Option<T> {
        if self.head.is_null() {
            return None;
        }
        let ptr = self.head;
        unsafe {
            self.head = (*ptr).next();
        }
        self.len -= 1;
        Some(self.fl.release(ptr))
    }

    /// Returns a handle to the node immediately before the last node,
    /// or `None` if the list has fewer than two elements.
    ///
    /// This method should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use listesimple::lists::LinkedList;
    /// let mut list = LinkedList::<char>::new();
    /// assert_eq!(list.second_to_last(), None);
    ///
    /// list.push_front('b');
    /// assert_eq!(list.second_to_last(), None);
    ///
    /// let a = list.push_head('a');
    /// assert_eq!(list.second_to_last(), Some(a));
    /// ```
    pub fn second_to_last(&self) -> Option<Node<T>> {
        if self.head.is_null() {
            return None;
        }
        unsafe {
            let mut cur = self.head;
            let mut next = (*cur).next();
            if next.is_null() {
                return None;
            }
            while !(*next).next().is_null() {
                cur = next;
                next = (*next).next();
            }
            Some(self.handle(cur))
        }
    }

    /// Reverses the list in place. The former head becomes the tail
    /// and the former tail becomes the head. No node is allocated or
    /// freed and every handle stays valid.
    ///
    /// This method should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use listesimple::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// let tail = list.push_head(1);
    /// list.push_head(2);
    /// list.push_head(3);
    ///
    /// list.reverse();
    /// assert_eq!(list.to_string(), "ListeSimple(1, 2, 3)");
    /// assert_eq!(list.is_head(&tail), Some(true));
    /// ```
    pub fn reverse(&mut self) {
        let mut prev: *mut InternalNode<T> = ptr::null_mut();
        let mut cur = self.head;
        while !cur.is_null() {
            unsafe {
                let next = (*cur).next();
                (*cur).set_next(prev);
                prev = cur;
                cur = next;
            }
        }
        self.head = prev;
        debug!(len = self.len, "reversed list");
    }

    /// Returns a handle to the node whose `next` link points at the
    /// specified node. Nodes are compared by identity and not by
    /// value.
    ///
    /// Returns [`ListError::InvalidNode`] if the handle is invalid and
    /// [`ListError::NoPredecessor`] if the node is the head.
    ///
    /// This method should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use listesimple::lists::LinkedList;
    /// use listesimple::lists::linkedlist::ListError;
    /// let mut list = LinkedList::<u8>::new();
    /// let last = list.push_head(7);
    /// let first = list.push_head(7);
    ///
    /// assert_eq!(list.predecessor_of(&last), Ok(first));
    /// assert_eq!(list.predecessor_of(&first), Err(ListError::NoPredecessor));
    /// ```
    pub fn predecessor_of(&self, node: &Node<T>) -> Result<Node<T>, ListError> {
        let n_ptr = self.node_ptr(node).ok_or(ListError::InvalidNode)?;
        if n_ptr == self.head {
            return Err(ListError::NoPredecessor);
        }
        let prev = self.prev_ptr(n_ptr).ok_or(ListError::NotLinked)?;
        Ok(self.handle(prev))
    }

    /// Exchanges the positions of the two nodes in the list. The
    /// payloads stay in their nodes; only the links move, so handles
    /// keep referring to the same values. Swapping a node with itself
    /// does nothing.
    ///
    /// Both handles and the predecessors they need are resolved before
    /// any link is rewritten, so on error the list is unchanged.
    ///
    /// This method should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use listesimple::lists::LinkedList;
    /// let mut list = LinkedList::<char>::new();
    /// let c = list.push_head('c');
    /// let b = list.push_head('b');
    /// let a = list.push_head('a');
    ///
    /// list.swap_nodes(&a, &c).unwrap();
    /// assert_eq!(list.to_string(), "ListeSimple(c, b, a)");
    ///
    /// list.swap_nodes(&c, &b).unwrap();
    /// assert_eq!(list.to_string(), "ListeSimple(b, c, a)");
    /// ```
    pub fn swap_nodes(&mut self, node: &Node<T>, other: &Node<T>) -> Result<(), ListError> {
        let n_ptr = self.node_ptr(node).ok_or(ListError::InvalidNode)?;
        let o_ptr = self.node_ptr(other).ok_or(ListError::InvalidNode)?;
        if n_ptr == o_ptr {
            return Ok(());
        }

        if n_ptr != self.head && o_ptr != self.head {
            let np_prev = self.prev_ptr(n_ptr).ok_or(ListError::NotLinked)?;
            let op_prev = self.prev_ptr(o_ptr).ok_or(ListError::NotLinked)?;
            unsafe {
                (*np_prev).set_next(o_ptr);
                (*op_prev).set_next(n_ptr);
            }
        } else if n_ptr == self.head {
            let op_prev = self.prev_ptr(o_ptr).ok_or(ListError::NotLinked)?;
            unsafe {
                (*op_prev).set_next(n_ptr);
            }
            self.head = o_ptr;
        } else {
            let np_prev = self.prev_ptr(n_ptr).ok_or(ListError::NotLinked)?;
            unsafe {
                (*np_prev).set_next(o_ptr);
            }
            self.head = n_ptr;
        }

        // When the nodes are adjacent one of them now links to itself.
        // Exchanging the successors below breaks that loop.
        unsafe {
            let o_next = (*o_ptr).next();
            let n_next = (*n_ptr).next();
            (*o_ptr).set_next(n_next);
            (*n_ptr).set_next(o_next);
        }
        trace!(node = node.nid, other = other.nid, "swapped nodes");
        Ok(())
    }

    ////////////////////
    //Private Helpers
    ////////////////////

    fn handle(&self, ptr: *mut InternalNode<T>) -> Node<T> {
        unsafe { Node::new(self.cid, (*ptr).nid, ptr) }
    }

    /// Returns a valid raw pointer to the specified Handle or None if
    /// the handle is invalid. This method checks the container Id
    /// (cid) of the handle against the list itself so that handles
    /// cannot be used across lists. If the container Id matches then
    /// the node is checked against the freelist flag and the node Id
    /// stored at that memory location, since cells are reused after
    /// being released.
    fn node_ptr(&self, node: &Node<T>) -> Option<*mut InternalNode<T>> {
        if node.cid != self.cid {
            return None;
        }
        unsafe {
            // A released cell keeps a stale nid so check the flag
            // first
            if (*node.ptr).fl_node {
                return None;
            }

            if (*node.ptr).nid != node.nid {
                return None;
            }
        }

        Some(node.ptr)
    }

    /// Walks from the head to the node whose `next` is `target`. The
    /// target must not be the head. Returns None if the walk falls off
    /// the end of the list.
    fn prev_ptr(&self, target: *mut InternalNode<T>) -> Option<*mut InternalNode<T>> {
        if self.head.is_null() {
            return None;
        }
        let mut prev = self.head;
        unsafe {
            let mut cur = (*prev).next();
            while cur != target {
                if cur.is_null() {
                    return None;
                }
                prev = cur;
                cur = (*cur).next();
            }
        }
        Some(prev)
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns `true` if the list contains an element equal to the
    /// specified value.
    ///
    /// This method should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use listesimple::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// list.push_front(1);
    /// assert!(list.contains(&1));
    /// assert!(!list.contains(&2));
    /// ```
    pub fn contains(&self, x: &T) -> bool {
        self.iter().any(|e| e == x)
    }

    /// Returns a handle to the first node (from the head) whose value
    /// is equal to the specified value, or `None` if there is no such
    /// node.
    ///
    /// # Examples
    /// ```
    /// use listesimple::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// list.push_head(4);
    /// let node = list.push_head(4);
    /// list.push_head(3);
    /// assert_eq!(list.find(&4), Some(node));
    /// assert_eq!(list.find(&5), None);
    /// ```
    pub fn find(&self, x: &T) -> Option<Node<T>> {
        let mut cur = self.head;
        while !cur.is_null() {
            unsafe {
                if (*cur).value() == x {
                    return Some(self.handle(cur));
                }
                cur = (*cur).next();
            }
        }
        None
    }

    /// Overwrites the value of the first node (from the head) whose
    /// value is equal to `target`. Returns `true` if a node was
    /// overwritten and `false` if nothing matched.
    ///
    /// This method should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use listesimple::lists::LinkedList;
    /// let mut list = LinkedList::<char>::new();
    /// list.push_front('x');
    /// list.push_front('y');
    /// list.push_front('x');
    ///
    /// assert!(list.replace_first(&'x', 'w'));
    /// assert_eq!(list.to_string(), "ListeSimple(w, y, x)");
    /// assert!(!list.replace_first(&'z', 'w'));
    /// ```
    pub fn replace_first(&mut self, target: &T, new_val: T) -> bool {
        let mut cur = self.head;
        while !cur.is_null() {
            unsafe {
                if (*cur).value() == target {
                    (*cur).set_value(new_val);
                    return true;
                }
                cur = (*cur).next();
            }
        }
        false
    }

    /// Overwrites the value of every node whose value is equal to
    /// `target`, from head to tail, and returns the number of nodes
    /// overwritten.
    ///
    /// This method should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use listesimple::lists::LinkedList;
    /// let mut list = LinkedList::<char>::new();
    /// for c in ['x', 'x', 'y', 'x'].iter() {
    ///     list.push_front(*c);
    /// }
    /// assert_eq!(list.replace_all(&'x', 'w'), 3);
    /// assert_eq!(list.to_string(), "ListeSimple(w, y, w, w)");
    /// ```
    pub fn replace_all(&mut self, target: &T, new_val: T) -> usize
    where
        T: Clone,
    {
        let mut count = 0;
        let mut cur = self.head;
        while !cur.is_null() {
            unsafe {
                if (*cur).value() == target {
                    (*cur).set_value(new_val.clone());
                    count += 1;
                }
                cur = (*cur).next();
            }
        }
        count
    }

    /// Removes the first node (from the head) whose value is equal to
    /// `target` and returns its value, or `None` if nothing matched.
    /// The predecessor of the removed node is linked to its successor.
    ///
    /// This method should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use listesimple::lists::LinkedList;
    /// let mut list = LinkedList::<char>::new();
    /// for c in ['z', 'x', 'y', 'x'].iter() {
    ///     list.push_front(*c);
    /// }
    /// assert_eq!(list.remove_first(&'x'), Some('x'));
    /// assert_eq!(list.to_string(), "ListeSimple(y, x, z)");
    /// assert_eq!(list.remove_first(&'q'), None);
    /// assert_eq!(list.size(), 3);
    /// ```
    pub fn remove_first(&mut self, target: &T) -> Option<T> {
        if self.head.is_null() {
            return None;
        }
        let cur;
        unsafe {
            if (*self.head).value() == target {
                return self.pop_head();
            }
            let mut prev = self.head;
            let mut next = (*prev).next();
            while !next.is_null() && (*next).value() != target {
                prev = next;
                next = (*next).next();
            }
            if next.is_null() {
                return None;
            }
            cur = next;
            (*prev).set_next((*cur).next());
        }
        self.len -= 1;
        let nid = unsafe { (*cur).nid };
        trace!(nid, len = self.len, "unlinked node");
        Some(self.fl.release(cur))
    }

    /// Removes every node whose value is equal to `target` and
    /// returns the number of nodes removed. Nodes that are kept keep
    /// their identity and their relative order.
    ///
    /// The chain is rebuilt from the tail towards the head: each kept
    /// node is linked to the already rebuilt remainder of the list
    /// and each matching node is dropped from it. The list is walked
    /// twice instead of recursing so that long lists cannot overflow
    /// the stack. All comparisons happen in the first walk, before
    /// any link is touched.
    ///
    /// This method should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use listesimple::lists::LinkedList;
    /// let mut list = LinkedList::<char>::new();
    /// for c in ['z', 'x', 'y', 'x'].iter() {
    ///     list.push_front(*c);
    /// }
    /// assert_eq!(list.remove_all(&'x'), 2);
    /// assert_eq!(list.to_string(), "ListeSimple(y, z)");
    /// assert_eq!(list.size(), 2);
    /// ```
    pub fn remove_all(&mut self, target: &T) -> usize {
        let mut marked: Vec<(*mut InternalNode<T>, bool)> = Vec::with_capacity(self.len);
        let mut cur = self.head;
        while !cur.is_null() {
            unsafe {
                marked.push((cur, (*cur).value() == target));
                cur = (*cur).next();
            }
        }

        let mut rest: *mut InternalNode<T> = ptr::null_mut();
        let mut removed = Vec::new();
        while let Some((n_ptr, matched)) = marked.pop() {
            if matched {
                removed.push(self.fl.release(n_ptr));
            } else {
                unsafe {
                    (*n_ptr).set_next(rest);
                }
                rest = n_ptr;
            }
        }
        self.head = rest;
        self.len -= removed.len();
        debug!(removed = removed.len(), len = self.len, "removed matching nodes");
        removed.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    }

    /// Builds a list whose head-to-tail order is `vals` and returns
    /// the handles in the same order.
    fn list_of<T: Clone>(vals: &[T]) -> (LinkedList<T>, Vec<Node<T>>) {
        let mut ll = LinkedList::<T>::new();
        let mut nodes: Vec<Node<T>> = vals.iter().rev().map(|v| ll.push_head(v.clone())).collect();
        nodes.reverse();
        (ll, nodes)
    }

    /// Counts the nodes by walking the raw links, independently of
    /// `len`.
    fn walk_len<T>(ll: &LinkedList<T>) -> usize {
        let mut count = 0;
        let mut cur = ll.head;
        while !cur.is_null() {
            count += 1;
            assert!(count <= ll.capacity(), "cycle in chain");
            cur = unsafe { (*cur).next() };
        }
        count
    }

    fn check_chain<T: PartialEq + fmt::Debug>(ll: &LinkedList<T>, expected: &[T]) {
        let actual: Vec<&T> = ll.iter().collect();
        let expected: Vec<&T> = expected.iter().collect();
        assert_eq!(actual, expected);
        assert_eq!(ll.len(), expected.len());
        assert_eq!(ll.size(), expected.len() as u64);
        assert_eq!(walk_len(ll), expected.len());
        assert_eq!(ll.is_empty(), expected.is_empty());
    }

    macro_rules! assert_chain {
        ($ll:ident, [$($val:expr),*]) => {
            check_chain(&$ll, &[$($val),*]);
        };
    }

    macro_rules! assert_order {
        ($ll: ident, $x: expr, $y: expr) => {
            let x_ptr;
            let y_ptr;

            match $ll.node_ptr(&$x) {
                None => panic!("Node: {:?} not found", $x),
                Some(n_ptr) => x_ptr = n_ptr,
            }

            match $ll.node_ptr(&$y) {
                None => panic!("Node y: {:?} not found", $y),
                Some(n_ptr) => y_ptr = n_ptr,
            }

            unsafe {
                assert_eq!((*x_ptr).next(), y_ptr);
            }
            assert_eq!($ll.next_node(&$x), Some($y));
            assert_eq!($ll.predecessor_of(&$y), Ok($x));
            assert_eq!($ll.has_next(&$x), Some(true));
        };
    }

    macro_rules! assert_is_head {
        ($ll:ident, $node:expr) => {
            assert_eq!($ll.is_head(&$node), Some(true));
            assert_eq!($ll.head_node(), Some($node));
            assert_eq!($ll.predecessor_of(&$node), Err(ListError::NoPredecessor));
        };
    }

    macro_rules! assert_is_tail {
        ($ll:ident, $node:expr) => {
            assert_eq!($ll.has_next(&$node), Some(false));
            assert_eq!($ll.next_node(&$node), None);
        };
    }

    #[test]
    fn test_new() {
        let ll = LinkedList::<u8>::new();
        assert_chain!(ll, []);
        assert_eq!(ll.capacity(), 8);
        assert_eq!(ll.head(), None);
        assert_eq!(ll.head_node(), None);
    }

    #[test]
    fn test_default() {
        let ll: LinkedList<u8> = Default::default();
        assert_chain!(ll, []);
    }

    #[test]
    fn test_push_head() {
        let mut ll = LinkedList::<u8>::new();
        let a = ll.push_head(1);
        assert_is_head!(ll, a);
        assert_is_tail!(ll, a);
        assert_chain!(ll, [1]);

        let b = ll.push_head(2);
        assert_is_head!(ll, b);
        assert_order!(ll, b, a);
        assert_is_tail!(ll, a);

        let c = ll.push_head(3);
        assert_is_head!(ll, c);
        assert_order!(ll, c, b);
        assert_order!(ll, b, a);
        assert_chain!(ll, [3, 2, 1]);
    }

    #[test]
    fn test_push_front_order() {
        let mut ll = LinkedList::<char>::new();
        ll.push_front('a');
        ll.push_front('b');
        ll.push_front('c');
        assert_eq!(ll.to_string(), "ListeSimple(c, b, a)");
        assert_eq!(ll.front(), Some(&'c'));
    }

    #[test]
    fn test_pop_head() {
        let (mut ll, nodes) = list_of(&[1u8, 2, 3]);
        assert_eq!(ll.pop_front(), Some(1));
        assert_eq!(ll.node(&nodes[0]), None);
        assert_is_head!(ll, nodes[1]);
        assert_chain!(ll, [2, 3]);
        assert_eq!(ll.pop_head(), Some(2));
        assert_eq!(ll.pop_head(), Some(3));
        assert_eq!(ll.pop_head(), None);
        assert_chain!(ll, []);
    }

    #[test]
    fn test_capacity_zero() {
        let mut ll = LinkedList::<u8>::with_capacity(0);
        assert_eq!(ll.capacity(), 0);
        for _ in 0..5 {
            ll.push_head(11);
        }
        assert_eq!(ll.len(), 5);
        assert_eq!(ll.capacity(), 5);

        for _ in 0..3 {
            ll.pop_head();
        }
        assert_eq!(ll.len(), 2);
        assert_eq!(ll.capacity(), 5);
    }

    #[test]
    fn test_capacity() {
        let mut ll = LinkedList::<u8>::with_capacity(2);
        assert_eq!(ll.capacity(), 2);
        for _ in 0..5 {
            ll.push_head(11);
        }
        assert_eq!(ll.len(), 5);
        assert_eq!(ll.capacity(), 8);
        for _ in 0..3 {
            ll.push_head(11);
        }
        assert_eq!(ll.len(), 8);
        assert_eq!(ll.capacity(), 8);
        ll.push_head(11);
        assert_eq!(ll.len(), 9);
        assert_eq!(ll.capacity(), 16);

        assert_eq!(ll.remove_all(&11), 9);
        assert_eq!(ll.len(), 0);
        assert_eq!(ll.capacity(), 16);
    }

    #[test]
    fn test_node_reuse() {
        let mut ll = LinkedList::<u8>::with_capacity(8);
        for i in 0..7 {
            ll.push_head(i);
        }
        let node = ll.push_head(7);

        ll.pop_head();

        // the only free cell is the one just released
        let node2 = ll.push_head(200);
        assert_eq!(node2.ptr, node.ptr);
        assert_eq!(ll.node(&node2), Some(&200));
        assert_eq!(ll.node(&node), None);
        assert_eq!(ll.swap_nodes(&node, &node2), Err(ListError::InvalidNode));
    }

    #[test]
    fn test_foreign_node() {
        let (mut ll, nodes) = list_of(&[1u8, 2]);
        let (other, other_nodes) = list_of(&[1u8, 2]);
        assert_eq!(ll.node(&other_nodes[0]), None);
        assert_eq!(ll.predecessor_of(&other_nodes[1]), Err(ListError::InvalidNode));
        assert_eq!(
            ll.swap_nodes(&nodes[0], &other_nodes[1]),
            Err(ListError::InvalidNode)
        );
        assert_chain!(ll, [1, 2]);
        assert_chain!(other, [1, 2]);
    }

    #[test]
    fn test_default_node_is_invalid() {
        let (ll, _) = list_of(&[1u8]);
        let hnd = Node::<u8>::default();
        assert_eq!(ll.node(&hnd), None);
        assert_eq!(ll.is_head(&hnd), None);
    }

    #[test]
    fn test_clear() {
        let mut ll = LinkedList::<u8>::with_capacity(10);
        let a = ll.push_head(0);
        ll.push_head(1);
        ll.push_head(2);
        ll.clear();
        assert_chain!(ll, []);
        assert_eq!(ll.capacity(), 10);
        assert_eq!(ll.node(&a), None);
    }

    #[test]
    fn test_drop_releases_payloads() {
        use std::rc::Rc;
        let payload = Rc::new(5);
        {
            let mut ll = LinkedList::with_capacity(1);
            for _ in 0..4 {
                ll.push_front(Rc::clone(&payload));
            }
            assert_eq!(Rc::strong_count(&payload), 5);
            ll.remove_first(&Rc::new(5));
            assert_eq!(Rc::strong_count(&payload), 4);
        }
        assert_eq!(Rc::strong_count(&payload), 1);
    }

    #[test]
    fn test_iter() {
        let (mut ll, _) = list_of(&[1u8, 2, 3]);
        let vals: Vec<u8> = ll.iter().copied().collect();
        assert_eq!(vals, vec![1, 2, 3]);

        for v in &mut ll {
            *v *= 10;
        }
        let mut sum = 0;
        for v in &ll {
            sum += *v;
        }
        assert_eq!(sum, 60);
    }

    #[test]
    fn test_node_access() {
        let (mut ll, nodes) = list_of(&[1u8, 2]);
        assert_eq!(ll.node(&nodes[1]), Some(&2));
        if let Some(v) = ll.node_mut(&nodes[1]) {
            *v = 20;
        }
        assert_eq!(ll.set_value(&nodes[0], 10), Some(1));
        assert_chain!(ll, [10, 20]);
        if let Some(v) = ll.front_mut() {
            *v += 1;
        }
        assert_eq!(ll.head(), Some(&11));
    }

    #[test]
    fn test_find_and_contains() {
        let (ll, nodes) = list_of(&["x", "y", "x"]);
        assert_eq!(ll.find(&"x"), Some(nodes[0]));
        assert_eq!(ll.find(&"y"), Some(nodes[1]));
        assert_eq!(ll.find(&"z"), None);
        assert!(ll.contains(&"y"));
        assert!(!ll.contains(&"z"));
    }

    #[test]
    fn test_value_equality() {
        // equal strings in distinct allocations still match
        let (mut ll, _) = list_of(&[String::from("x"), String::from("y")]);
        let target = String::from("x");
        assert!(ll.replace_first(&target, String::from("w")));
        assert_eq!(ll.to_string(), "ListeSimple(w, y)");
        assert_eq!(ll.remove_first(&String::from("y")), Some(String::from("y")));
        assert_eq!(ll.to_string(), "ListeSimple(w)");
    }

    #[test]
    fn test_replace_first() {
        let (mut ll, nodes) = list_of(&["x", "y", "x", "z"]);
        assert!(ll.replace_first(&"x", "w"));
        assert_chain!(ll, ["w", "y", "x", "z"]);
        assert_eq!(ll.node(&nodes[0]), Some(&"w"));

        assert!(ll.replace_first(&"x", "w"));
        assert_chain!(ll, ["w", "y", "w", "z"]);

        assert!(!ll.replace_first(&"x", "w"));
        assert_chain!(ll, ["w", "y", "w", "z"]);

        let mut empty = LinkedList::<&str>::new();
        assert!(!empty.replace_first(&"x", "w"));
        assert_chain!(empty, []);
    }

    #[test]
    fn test_replace_all() {
        let (mut ll, nodes) = list_of(&["x", "y", "x", "x"]);
        assert_eq!(ll.replace_all(&"x", "w"), 3);
        assert_chain!(ll, ["w", "y", "w", "w"]);
        assert_eq!(ll.node(&nodes[3]), Some(&"w"));
        assert_eq!(ll.replace_all(&"x", "w"), 0);
        assert_chain!(ll, ["w", "y", "w", "w"]);
    }

    #[test]
    fn test_remove_first() {
        let (mut ll, nodes) = list_of(&["x", "y", "x", "z"]);
        assert_eq!(ll.remove_first(&"x"), Some("x"));
        assert_chain!(ll, ["y", "x", "z"]);
        assert_is_head!(ll, nodes[1]);
        assert_eq!(ll.node(&nodes[0]), None);

        assert_eq!(ll.remove_first(&"x"), Some("x"));
        assert_chain!(ll, ["y", "z"]);
        assert_order!(ll, nodes[1], nodes[3]);

        assert_eq!(ll.remove_first(&"z"), Some("z"));
        assert_chain!(ll, ["y"]);
        assert_is_tail!(ll, nodes[1]);

        assert_eq!(ll.remove_first(&"q"), None);
        assert_chain!(ll, ["y"]);

        assert_eq!(ll.remove_first(&"y"), Some("y"));
        assert_chain!(ll, []);
        assert_eq!(ll.remove_first(&"y"), None);
        assert_chain!(ll, []);
    }

    #[test]
    fn test_remove_all() {
        init_tracing();
        let (mut ll, nodes) = list_of(&["x", "y", "x", "z"]);
        assert_eq!(ll.remove_all(&"x"), 2);
        assert_chain!(ll, ["y", "z"]);
        assert_is_head!(ll, nodes[1]);
        assert_order!(ll, nodes[1], nodes[3]);
        assert_eq!(ll.node(&nodes[0]), None);
        assert_eq!(ll.node(&nodes[2]), None);
    }

    #[test]
    fn test_remove_all_every_node() {
        let (mut ll, _) = list_of(&[7u8, 7, 7]);
        assert_eq!(ll.remove_all(&7), 3);
        assert_chain!(ll, []);
        ll.push_front(1);
        assert_chain!(ll, [1]);
    }

    #[test]
    fn test_remove_all_no_match() {
        let (mut ll, nodes) = list_of(&[1u8, 2, 3]);
        assert_eq!(ll.remove_all(&9), 0);
        assert_chain!(ll, [1, 2, 3]);
        assert_is_head!(ll, nodes[0]);
        assert_order!(ll, nodes[0], nodes[1]);
        assert_order!(ll, nodes[1], nodes[2]);

        let mut empty = LinkedList::<u8>::new();
        assert_eq!(empty.remove_all(&1), 0);
        assert_chain!(empty, []);
    }

    #[test]
    fn test_remove_all_consecutive() {
        let (mut ll, nodes) = list_of(&[1u8, 2, 2, 2, 3, 2]);
        assert_eq!(ll.remove_all(&2), 4);
        assert_chain!(ll, [1, 3]);
        assert_order!(ll, nodes[0], nodes[4]);
        assert_is_tail!(ll, nodes[4]);
    }

    #[test]
    fn test_remove_all_long_list() {
        let mut ll = LinkedList::<u32>::with_capacity(0);
        for i in 0..200_000 {
            ll.push_front(i % 3);
        }
        assert_eq!(ll.remove_all(&0), 66_667);
        assert_eq!(ll.len(), 133_333);
        assert_eq!(walk_len(&ll), 133_333);
        assert!(!ll.contains(&0));
    }

    #[test]
    fn test_size_invariant() {
        let mut ll = LinkedList::<u8>::with_capacity(4);
        for i in 0..40u8 {
            ll.push_front(i % 5);
            if i % 7 == 0 {
                ll.remove_first(&(i % 5));
            }
            if i % 11 == 0 {
                ll.remove_all(&((i + 1) % 5));
            }
            assert_eq!(ll.size(), walk_len(&ll) as u64);
        }
        ll.reverse();
        assert_eq!(ll.size(), walk_len(&ll) as u64);
    }

    #[test]
    fn test_second_to_last() {
        let mut ll = LinkedList::<char>::new();
        assert_eq!(ll.second_to_last(), None);

        ll.push_front('b');
        assert_eq!(ll.second_to_last(), None);

        let a = ll.push_head('a');
        assert_eq!(ll.second_to_last(), Some(a));

        let (ll, nodes) = list_of(&['a', 'b', 'c', 'd']);
        assert_eq!(ll.second_to_last(), Some(nodes[2]));
        assert_eq!(ll.node(&nodes[2]), Some(&'c'));
    }

    #[test]
    fn test_reverse() {
        let (mut ll, nodes) = list_of(&[1u8, 2, 3, 4]);
        ll.reverse();
        assert_chain!(ll, [4, 3, 2, 1]);
        assert_is_head!(ll, nodes[3]);
        assert_order!(ll, nodes[3], nodes[2]);
        assert_order!(ll, nodes[2], nodes[1]);
        assert_order!(ll, nodes[1], nodes[0]);
        assert_is_tail!(ll, nodes[0]);

        ll.reverse();
        assert_chain!(ll, [1, 2, 3, 4]);
        assert_is_head!(ll, nodes[0]);
    }

    #[test]
    fn test_reverse_short() {
        let mut ll = LinkedList::<u8>::new();
        ll.reverse();
        assert_chain!(ll, []);

        let a = ll.push_head(1);
        ll.reverse();
        assert_chain!(ll, [1]);
        assert_is_head!(ll, a);
        assert_is_tail!(ll, a);
    }

    #[test]
    fn test_predecessor_of() {
        let (mut ll, nodes) = list_of(&[5u8, 5, 5]);
        assert_eq!(ll.predecessor_of(&nodes[0]), Err(ListError::NoPredecessor));
        assert_eq!(ll.predecessor_of(&nodes[1]), Ok(nodes[0]));
        assert_eq!(ll.predecessor_of(&nodes[2]), Ok(nodes[1]));

        ll.remove_first(&5);
        assert_eq!(ll.predecessor_of(&nodes[0]), Err(ListError::InvalidNode));
        assert_eq!(ll.predecessor_of(&nodes[1]), Err(ListError::NoPredecessor));
    }

    #[test]
    fn test_swap_self() {
        let (mut ll, nodes) = list_of(&['a', 'b', 'c']);
        for n in nodes.iter() {
            assert_eq!(ll.swap_nodes(n, n), Ok(()));
        }
        assert_chain!(ll, ['a', 'b', 'c']);
    }

    #[test]
    fn test_swap_head_and_tail() {
        init_tracing();
        let (mut ll, nodes) = list_of(&['a', 'b', 'c']);
        ll.swap_nodes(&nodes[0], &nodes[2]).unwrap();
        assert_chain!(ll, ['c', 'b', 'a']);
        assert_is_head!(ll, nodes[2]);
        assert_order!(ll, nodes[2], nodes[1]);
        assert_order!(ll, nodes[1], nodes[0]);
        assert_is_tail!(ll, nodes[0]);

        // head passed second
        ll.swap_nodes(&nodes[0], &nodes[2]).unwrap();
        assert_chain!(ll, ['a', 'b', 'c']);
        assert_is_head!(ll, nodes[0]);
    }

    #[test]
    fn test_swap_adjacent_at_head() {
        let (mut ll, nodes) = list_of(&['a', 'b', 'c']);
        ll.swap_nodes(&nodes[0], &nodes[1]).unwrap();
        assert_chain!(ll, ['b', 'a', 'c']);
        assert_is_head!(ll, nodes[1]);
        assert_order!(ll, nodes[1], nodes[0]);
        assert_order!(ll, nodes[0], nodes[2]);

        // same pair, successor passed first
        ll.swap_nodes(&nodes[0], &nodes[1]).unwrap();
        assert_chain!(ll, ['a', 'b', 'c']);
        assert_is_head!(ll, nodes[0]);
    }

    #[test]
    fn test_swap_adjacent_in_middle() {
        let (mut ll, nodes) = list_of(&[1u8, 2, 3, 4]);
        ll.swap_nodes(&nodes[1], &nodes[2]).unwrap();
        assert_chain!(ll, [1, 3, 2, 4]);
        assert_order!(ll, nodes[0], nodes[2]);
        assert_order!(ll, nodes[2], nodes[1]);
        assert_order!(ll, nodes[1], nodes[3]);

        ll.swap_nodes(&nodes[1], &nodes[2]).unwrap();
        assert_chain!(ll, [1, 2, 3, 4]);

        // tail and its predecessor
        ll.swap_nodes(&nodes[3], &nodes[2]).unwrap();
        assert_chain!(ll, [1, 2, 4, 3]);
        assert_is_tail!(ll, nodes[2]);
    }

    #[test]
    fn test_swap_disjoint() {
        let (mut ll, nodes) = list_of(&[1u8, 2, 3, 4, 5]);
        ll.swap_nodes(&nodes[1], &nodes[3]).unwrap();
        assert_chain!(ll, [1, 4, 3, 2, 5]);
        assert_order!(ll, nodes[0], nodes[3]);
        assert_order!(ll, nodes[3], nodes[2]);
        assert_order!(ll, nodes[2], nodes[1]);
        assert_order!(ll, nodes[1], nodes[4]);
    }

    #[test]
    fn test_swap_self_inverse() {
        let vals = [1u8, 2, 3, 4, 5];
        for i in 0..vals.len() {
            for j in 0..vals.len() {
                let (mut ll, nodes) = list_of(&vals);
                ll.swap_nodes(&nodes[i], &nodes[j]).unwrap();
                assert_eq!(ll.len(), vals.len());
                assert_eq!(walk_len(&ll), vals.len());
                assert_eq!(ll.iter().nth(i), Some(&vals[j]));
                assert_eq!(ll.iter().nth(j), Some(&vals[i]));
                ll.swap_nodes(&nodes[i], &nodes[j]).unwrap();
                assert_chain!(ll, [1, 2, 3, 4, 5]);
            }
        }
    }

    #[test]
    fn test_swap_invalid_leaves_list() {
        let (mut ll, nodes) = list_of(&[1u8, 2, 3]);
        ll.remove_first(&3);
        assert_eq!(ll.swap_nodes(&nodes[0], &nodes[2]), Err(ListError::InvalidNode));
        assert_eq!(ll.swap_nodes(&nodes[2], &nodes[1]), Err(ListError::InvalidNode));
        assert_chain!(ll, [1, 2]);
        assert_is_head!(ll, nodes[0]);
    }

    #[test]
    fn test_display() {
        let mut ll = LinkedList::<u8>::new();
        assert_eq!(ll.to_string(), "ListeSimple()");
        ll.push_front(1);
        assert_eq!(ll.to_string(), "ListeSimple(1)");
        ll.push_front(2);
        ll.push_front(3);
        assert_eq!(ll.to_string(), "ListeSimple(3, 2, 1)");
        assert_eq!(format!("{:?}", ll), "[3, 2, 1]");
    }
}
