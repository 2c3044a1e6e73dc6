/// Per-point pass/fail flags for one chunk, in chunk order.
pub type Mask = Vec<bool>;

/// A contiguous batch of points read from a stream.
///
/// `offset` is the stream index of the first point, so consecutive chunks
/// satisfy `next.offset == prev.end()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk<P> {
    pub offset: u64,
    pub points: Vec<P>,
}

impl<P> Chunk<P> {
    pub fn new(offset: u64, points: Vec<P>) -> Self {
        Self { offset, points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn end(&self) -> u64 {
        self.offset + self.points.len() as u64
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.points.iter()
    }

    pub fn into_points(self) -> Vec<P> {
        self.points
    }
}

#[cfg(test)]
mod tests {
    use super::Chunk;

    #[test]
    fn end_follows_offset() {
        let chunk = Chunk::new(10, vec![1, 2, 3]);
        assert_eq!(chunk.len(), 3);
        assert_eq!(chunk.end(), 13);
        assert!(!chunk.is_empty());
        assert_eq!(chunk.into_points(), vec![1, 2, 3]);
    }

    #[test]
    fn empty_chunk() {
        let chunk: Chunk<u8> = Chunk::new(5, Vec::new());
        assert!(chunk.is_empty());
        assert_eq!(chunk.end(), 5);
    }
}
