use std::collections::{LinkedList, VecDeque};

/// An ordered sequence the keyed search can probe by position.
///
/// Random-access containers answer `item` in constant time; linked lists walk
/// from the front. Both give identical search results, only the cost differs.
pub trait KeySequence {
    type Item;

    /// Number of elements in the sequence.
    fn len(&self) -> usize;

    /// Element at `index`, or `None` past the end.
    fn item(&self, index: usize) -> Option<&Self::Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> KeySequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn item(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T, const N: usize> KeySequence for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn item(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> KeySequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn item(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> KeySequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn item(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> KeySequence for LinkedList<T> {
    type Item = T;

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn item(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_and_list_agree() {
        let values = vec![1, 2, 3];
        let list: LinkedList<i32> = values.iter().copied().collect();

        assert_eq!(KeySequence::len(&values), KeySequence::len(&list));
        for i in 0..4 {
            assert_eq!(values.item(i), list.item(i));
        }
    }

    #[test]
    fn test_is_empty() {
        let empty: VecDeque<u8> = VecDeque::new();
        assert!(KeySequence::is_empty(&empty));
        assert!(!KeySequence::is_empty(&[1u8]));
    }
}
