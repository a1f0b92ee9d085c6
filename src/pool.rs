//! Slot arena holding one kind of entity.
//!
//! Every live entity sits in a slot addressed by a stable `SlotId`.  Retiring
//! an entity empties its slot straight away, so later passes of the same tick
//! never see it, but the slot is only handed out again after `recycle()` is
//! called at the end of the tick.  An id held during a tick therefore never
//! starts pointing at a different entity halfway through.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(usize);

#[derive(Clone, Debug)]
pub struct Pool<T> {
    slots: Vec<Option<T>>,
    /// Slots ready for reuse.
    free: Vec<usize>,
    /// Slots emptied this tick; moved to `free` by `recycle`.
    retired: Vec<usize>,
    live: usize,
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Pool<T> {
    pub fn new() -> Self {
        Pool {
            slots: Vec::new(),
            free: Vec::new(),
            retired: Vec::new(),
            live: 0,
        }
    }

    /// Store `value`, reusing the lowest recycled slot if there is one.
    pub fn insert(&mut self, value: T) -> SlotId {
        self.live += 1;
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(value);
                SlotId(index)
            }
            None => {
                self.slots.push(Some(value));
                SlotId(self.slots.len() - 1)
            }
        }
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Remove the entity in `id`.  Returns `None` if the slot was already empty.
    pub fn retire(&mut self, id: SlotId) -> Option<T> {
        let taken = self.slots.get_mut(id.0).and_then(Option::take);
        if taken.is_some() {
            self.live -= 1;
            self.retired.push(id.0);
        }
        taken
    }

    /// Retire every entity for which `keep` returns false.
    pub fn retain_mut(&mut self, mut keep: impl FnMut(&mut T) -> bool) {
        for index in 0..self.slots.len() {
            let drop_it = match self.slots[index].as_mut() {
                Some(value) => !keep(value),
                None => false,
            };
            if drop_it {
                self.retire(SlotId(index));
            }
        }
    }

    /// Make slots retired since the last call available to `insert` again.
    pub fn recycle(&mut self) {
        self.free.append(&mut self.retired);
        // Pop from the back, so keep the lowest index there.
        self.free.sort_unstable_by(|a, b| b.cmp(a));
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Ids of live entities in slot order.
    pub fn ids(&self) -> Vec<SlotId> {
        self.iter().map(|(id, _)| id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|v| (SlotId(i), v)))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter_map(Option::as_ref)
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut().filter_map(Option::as_mut)
    }
}

impl<T> FromIterator<T> for Pool<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut pool = Pool::new();
        for value in iter {
            pool.insert(value);
        }
        pool
    }
}
