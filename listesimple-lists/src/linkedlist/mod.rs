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

//! A singly linked list that owns its nodes and draws them from a
//! pre-allocated pool. Elements are pushed at the head and can be
//! replaced or removed by matching their value.
//!
//! Nodes are also addressed by handles, which name a node by
//! identity. Handles are used to find a node's predecessor and to
//! swap two nodes in place without moving their payloads.
//!
pub mod error;
pub mod fl;
pub mod iter;
pub mod list;
pub mod node;
