//! Live star registry
//!
//! An index-stable arena threaded with a singly-linked list. `head` plays the
//! role of a sentinel node: it is never a star, so unlinking the first live
//! star is the same operation as unlinking any other. Vacated slots go on a
//! free list and are reused by the next insertion.

use std::collections::TryReserveError;

use super::star::Star;

/// Stable handle to a live star
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StarId(usize);

#[derive(Debug, Clone)]
enum Slot {
    Live { star: Star, next: Option<usize> },
    Vacant { next_free: Option<usize> },
}

/// Owns every live star
#[derive(Debug, Clone, Default)]
pub struct StarRegistry {
    slots: Vec<Slot>,
    /// Sentinel link: first live star in list order
    head: Option<usize>,
    /// First vacant slot
    free: Option<usize>,
    len: usize,
}

impl StarRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Link `star` in directly after the sentinel. O(1); only fails when the
    /// arena has to grow and the allocator refuses.
    pub fn insert_front(&mut self, star: Star) -> Result<StarId, TryReserveError> {
        let next = self.head;
        let index = match self.free {
            Some(index) => {
                if let Slot::Vacant { next_free } = self.slots[index] {
                    self.free = next_free;
                }
                self.slots[index] = Slot::Live { star, next };
                index
            }
            None => {
                self.slots.try_reserve(1)?;
                self.slots.push(Slot::Live { star, next });
                self.slots.len() - 1
            }
        };
        self.head = Some(index);
        self.len += 1;
        Ok(StarId(index))
    }

    pub fn get(&self, id: StarId) -> Option<&Star> {
        match self.slots.get(id.0) {
            Some(Slot::Live { star, .. }) => Some(star),
            _ => None,
        }
    }

    /// Stars in list order (most recently inserted first)
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            slots: &self.slots,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Visit every live star once, in list order
    pub fn for_each(&self, f: impl FnMut(&Star)) {
        self.iter().for_each(f);
    }

    /// Visit every live star once, allowing it to change its own fields
    pub fn for_each_mut(&mut self, mut f: impl FnMut(&mut Star)) {
        let mut cursor = self.head;
        while let Some(index) = cursor {
            match &mut self.slots[index] {
                Slot::Live { star, next } => {
                    f(star);
                    cursor = *next;
                }
                Slot::Vacant { .. } => break,
            }
        }
    }

    /// Single sweep that unlinks and drops every star `doomed` returns true
    /// for. Returns how many were removed.
    pub fn remove_while(&mut self, mut doomed: impl FnMut(&Star) -> bool) -> usize {
        // None is the sentinel
        let mut last_kept: Option<usize> = None;
        let mut cursor = self.head;
        let mut removed = 0;

        while let Some(index) = cursor {
            let (remove, next) = match &self.slots[index] {
                Slot::Live { star, next } => (doomed(star), *next),
                Slot::Vacant { .. } => break,
            };

            if remove {
                self.relink(last_kept, next);
                self.slots[index] = Slot::Vacant {
                    next_free: self.free,
                };
                self.free = Some(index);
                self.len -= 1;
                removed += 1;
            } else {
                last_kept = Some(index);
            }
            cursor = next;
        }

        removed
    }

    /// Drop every remaining star, leaving only the sentinel. Returns how many
    /// were freed.
    pub fn clear(&mut self) -> usize {
        let freed = self.len;
        self.slots.clear();
        self.head = None;
        self.free = None;
        self.len = 0;
        freed
    }

    fn relink(&mut self, from: Option<usize>, to: Option<usize>) {
        match from {
            None => self.head = to,
            Some(index) => {
                if let Slot::Live { next, .. } = &mut self.slots[index] {
                    *next = to;
                }
            }
        }
    }
}

/// Iterator over live stars in list order
pub struct Iter<'a> {
    slots: &'a [Slot],
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Star;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor?;
        match &self.slots[index] {
            Slot::Live { star, next } => {
                self.cursor = *next;
                self.remaining = self.remaining.saturating_sub(1);
                Some(star)
            }
            Slot::Vacant { .. } => {
                self.cursor = None;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

impl<'a> IntoIterator for &'a StarRegistry {
    type Item = &'a Star;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
