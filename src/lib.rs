mod circular;
mod container;
mod error;
mod linked_list;
mod settings;
mod views;

pub use circular::CircularBuffer;
pub use container::{Container, DoubleEndedContainer};
pub use error::CapacityError;
pub use linked_list::LinkedList;
pub use settings::{BackToFront, DropBehavior, FrontToBack};
pub use views::{
    CircularDeque, CircularQueue, CircularStack, Deque, LinkedDeque, LinkedQueue, LinkedStack,
    Queue, Stack,
};

/// Iterator types for [`CircularBuffer`].
pub mod circular_buffer {
    pub use crate::circular::{IntoIter, Iter, IterMut};
}

/// Iterator types for [`LinkedList`].
pub mod linked {
    pub use crate::linked_list::{IntoIter, Iter};
}
