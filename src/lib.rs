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

//! A singly linked list supporting mutation by value match, in-place
//! reversal and swapping of two nodes identified by handle.
//!
//! ```
//! use listesimple::lists::LinkedList;
//!
//! let mut list = LinkedList::<char>::new();
//! list.push_front('a');
//! list.push_front('b');
//! list.push_front('c');
//! assert_eq!(list.to_string(), "ListeSimple(c, b, a)");
//! ```

/// List data structures whose nodes are relinked in place.
pub mod lists {
    pub use listesimple_lists::linkedlist::list::LinkedList;
    /// This module contains structs specific to the [`LinkedList`]
    pub mod linkedlist {
        /// Error returned when a node handle cannot be resolved.
        pub use listesimple_lists::linkedlist::error::ListError;
        pub use listesimple_lists::linkedlist::iter::Iter;
        pub use listesimple_lists::linkedlist::iter::IterMut;
        pub use listesimple_lists::linkedlist::node::Node;
    }
}
