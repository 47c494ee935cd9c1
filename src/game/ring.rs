//! Fixed-capacity circular buffer of directions, packed four to a byte.

use super::direction::Direction;

/// Circular record of the direction taken at each body step.
///
/// Entry `i` is the direction from body cell `i` to body cell `i + 1`, so a
/// snake of length `n` keeps `n - 1` live entries. The buffer never grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionRing {
    data: Vec<u8>,
    capacity: usize,
}

impl DirectionRing {
    /// Create a ring holding `capacity` entries, all initialised to `Right`
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: vec![0; capacity.div_ceil(4)],
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, index: usize) -> Direction {
        let (byte, shift) = Self::slot(index);
        Direction::from_code(self.data[byte] >> shift)
    }

    pub fn set(&mut self, index: usize, direction: Direction) {
        let (byte, shift) = Self::slot(index);
        let cleared = self.data[byte] & !(3 << shift);
        self.data[byte] = cleared | (direction.code() << shift);
    }

    /// Index after `index`, wrapping at capacity
    pub fn next_index(&self, index: usize) -> usize {
        if index + 1 == self.capacity { 0 } else { index + 1 }
    }

    /// Index before `index`, wrapping at zero
    pub fn prev_index(&self, index: usize) -> usize {
        if index == 0 { self.capacity - 1 } else { index - 1 }
    }

    fn slot(index: usize) -> (usize, u8) {
        (index >> 2, ((index & 3) << 1) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ring_reads_right() {
        let ring = DirectionRing::new(9);
        assert_eq!(ring.capacity(), 9);
        for i in 0..9 {
            assert_eq!(ring.get(i), Direction::Right);
        }
    }

    #[test]
    fn test_set_does_not_touch_neighbours() {
        let mut ring = DirectionRing::new(8);
        ring.set(5, Direction::Up);
        ring.set(6, Direction::Left);
        ring.set(4, Direction::Down);

        assert_eq!(ring.get(3), Direction::Right);
        assert_eq!(ring.get(4), Direction::Down);
        assert_eq!(ring.get(5), Direction::Up);
        assert_eq!(ring.get(6), Direction::Left);
        assert_eq!(ring.get(7), Direction::Right);

        ring.set(5, Direction::Right);
        assert_eq!(ring.get(5), Direction::Right);
        assert_eq!(ring.get(4), Direction::Down);
        assert_eq!(ring.get(6), Direction::Left);
    }

    #[test]
    fn test_index_wrapping() {
        let ring = DirectionRing::new(5);
        assert_eq!(ring.next_index(3), 4);
        assert_eq!(ring.next_index(4), 0);
        assert_eq!(ring.prev_index(0), 4);
        assert_eq!(ring.prev_index(2), 1);
    }

    #[test]
    fn test_zero_capacity_is_promoted() {
        let ring = DirectionRing::new(0);
        assert_eq!(ring.capacity(), 1);
        assert_eq!(ring.next_index(0), 0);
    }
}
