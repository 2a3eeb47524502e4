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
use crate::{linkedlist::list::LinkedList, linkedlist::node::Node};

/// An iterator over the values of the [`LinkedList`](LinkedList),
/// from head to tail.
///
/// This struct is created by the [`.iter()`](LinkedList#method.iter)
/// of the [`LinkedList`](LinkedList).
///
/// # Examples
/// ```
/// use listesimple::lists::LinkedList;
/// use listesimple::lists::linkedlist::Iter;
///
/// let mut list = LinkedList::<u8>::new();
/// list.push_front(1);
/// list.push_front(2);
/// list.push_front(3);
///
/// let mut iter: Iter<u8> = list.iter();
/// assert_eq!(iter.next(), Some(&3));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next(), None);
/// ```
#[derive(Debug)]
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    cursor: Option<Node<T>>,
}

/// An iterator over the values of the [`LinkedList`] with mutable
/// references that allows the values to be modified.
///
/// This struct is created by the
/// [`.iter_mut()`](LinkedList#method.iter_mut) method of the
/// [`LinkedList`](LinkedList).
///
/// # Examples
/// ```
/// use listesimple::lists::LinkedList;
/// use listesimple::lists::linkedlist::IterMut;
///
/// let mut list = LinkedList::<u8>::new();
/// list.push_front(1);
/// list.push_front(2);
/// list.push_front(3);
///
/// let iter_mut: IterMut<u8> = list.iter_mut();
/// for e in iter_mut {
///     *e += 100;
/// }
///
/// assert_eq!(list.to_string(), "ListeSimple(103, 102, 101)");
/// ```
#[derive(Debug)]
pub struct IterMut<'a, T> {
    list: &'a mut LinkedList<T>,
    cursor: Option<Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a LinkedList<T>) -> Iter<T> {
        Iter {
            list,
            cursor: list.head_node(),
        }
    }
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut LinkedList<T>) -> IterMut<T> {
        IterMut {
            cursor: list.head_node(),
            list,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        let cur = self.cursor?;
        self.cursor = self.list.next_node(&cur);
        self.list.node(&cur)
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<&'a mut T> {
        let cur = self.cursor?;
        self.cursor = self.list.next_node(&cur);
        // every node is visited once so the references handed out
        // never alias
        unsafe { Some((*cur.ptr).value_mut()) }
    }
}
