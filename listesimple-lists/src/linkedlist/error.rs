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

use thiserror::Error;

/// Errors returned by the identity based operations of the
/// [`LinkedList`](../struct.LinkedList.html).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The handle was vended by another list or its node has since
    /// been removed.
    #[error("node handle is not valid for this list")]
    InvalidNode,
    /// The head of the list has no predecessor.
    #[error("the head node has no predecessor")]
    NoPredecessor,
    /// The node is valid but could not be reached from the head.
    #[error("node is not reachable from the head of the list")]
    NotLinked,
}
