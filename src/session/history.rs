//! Rolling angle history for the sit-up trend display
//!
//! Stores the last N angle sets in a ring. Cleared whenever the phase is
//! reset, so a new exercise never inherits stale frames.

use crate::pose::AngleSet;

/// Ring buffer of recent angle sets, read back oldest first
pub struct AngleHistory {
    /// Slot storage, `capacity` long once full
    data: Vec<AngleSet>,

    /// Next slot to overwrite once the ring is full
    write_index: usize,

    capacity: usize,
}

impl AngleHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: Vec::with_capacity(capacity),
            write_index: 0,
            capacity,
        }
    }

    /// Push the newest frame, evicting the oldest when full
    pub fn push(&mut self, angles: AngleSet) {
        if self.data.len() < self.capacity {
            self.data.push(angles);
        } else {
            self.data[self.write_index] = angles;
        }
        self.write_index = (self.write_index + 1) % self.capacity;
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Frames in chronological order
    pub fn iter(&self) -> impl Iterator<Item = &AngleSet> {
        let split = if self.data.len() < self.capacity { 0 } else { self.write_index };
        let (newer, older) = self.data.split_at(split);
        older.iter().chain(newer.iter())
    }

    /// Flat [lk, rk, torso, leg] per frame, oldest first
    pub fn as_flat(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.data.len() * 4);
        for angles in self.iter() {
            result.extend_from_slice(&angles.as_array());
        }
        result
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.write_index = 0;
    }
}

impl Default for AngleHistory {
    fn default() -> Self {
        Self::new(30)
    }
}
