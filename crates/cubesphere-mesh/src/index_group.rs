//! The three orientation groups the index buffers are split into.

/// Which sub-mesh a triangle belongs to, by the dominant axis of its face.
///
/// The discriminant is the sub-mesh slot a host should bind the list to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum IndexGroup {
    /// The `z = 0` and `z = N` belt faces.
    Z = 0,
    /// The `x = 0` and `x = N` belt faces.
    X = 1,
    /// The top and bottom caps.
    Y = 2,
}

impl IndexGroup {
    /// All groups in sub-mesh order.
    pub const ALL: [IndexGroup; 3] = [IndexGroup::Z, IndexGroup::X, IndexGroup::Y];

    /// Short lowercase name, used for export group labels.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            IndexGroup::Z => "z",
            IndexGroup::X => "x",
            IndexGroup::Y => "y",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submesh_order() {
        for (slot, group) in IndexGroup::ALL.iter().enumerate() {
            assert_eq!(*group as usize, slot);
        }
    }

    #[test]
    fn test_names_are_distinct() {
        let names: Vec<_> = IndexGroup::ALL.iter().map(|g| g.name()).collect();
        assert_eq!(names, vec!["z", "x", "y"]);
    }
}
