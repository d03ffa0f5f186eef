use crate::chunk::ChunkHandle;

/// Chunks whose mesh was rebuilt by one grid mutation, in rebuild order and
/// without duplicates. Consumers re-read exactly these meshes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct MeshUpdates {
    handles: Vec<ChunkHandle>,
}

impl MeshUpdates {
    pub(crate) fn push(&mut self, handle: ChunkHandle) -> bool {
        if self.handles.contains(&handle) {
            return false;
        }
        self.handles.push(handle);
        true
    }

    pub fn contains(&self, handle: ChunkHandle) -> bool {
        self.handles.contains(&handle)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn as_slice(&self) -> &[ChunkHandle] {
        &self.handles
    }

    pub fn iter(&self) -> impl Iterator<Item = ChunkHandle> + '_ {
        self.handles.iter().copied()
    }

    /// Appends every handle of `other` not already present.
    pub fn merge(&mut self, other: MeshUpdates) {
        for handle in other.handles {
            self.push(handle);
        }
    }
}

impl IntoIterator for MeshUpdates {
    type Item = ChunkHandle;
    type IntoIter = std::vec::IntoIter<ChunkHandle>;

    fn into_iter(self) -> Self::IntoIter {
        self.handles.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_deduplicates_and_keeps_order() {
        let mut updates = MeshUpdates::default();
        assert!(updates.push(ChunkHandle(3)));
        assert!(updates.push(ChunkHandle(1)));
        assert!(!updates.push(ChunkHandle(3)));
        assert_eq!(updates.as_slice(), &[ChunkHandle(3), ChunkHandle(1)]);
        assert_eq!(updates.len(), 2);
    }

    #[test]
    fn test_merge() {
        let mut a = MeshUpdates::default();
        let _ = a.push(ChunkHandle(0));
        let mut b = MeshUpdates::default();
        let _ = b.push(ChunkHandle(0));
        let _ = b.push(ChunkHandle(5));
        a.merge(b);
        assert_eq!(a.into_iter().collect::<Vec<_>>(), vec![ChunkHandle(0), ChunkHandle(5)]);
    }
}
