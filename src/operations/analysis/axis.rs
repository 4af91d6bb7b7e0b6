use crate::math::Vector3;

/// A canonical tool approach direction, or `Unknown` for faces that no
/// canonical direction reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReferenceAxis {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
    Unknown,
}

impl ReferenceAxis {
    /// The six canonical directions in their fixed tie-break order.
    pub const CANONICAL: [Self; 6] = [
        Self::PosX,
        Self::NegX,
        Self::PosY,
        Self::NegY,
        Self::PosZ,
        Self::NegZ,
    ];

    /// Every axis including `Unknown`, in tie-break order.
    pub const ALL: [Self; 7] = [
        Self::PosX,
        Self::NegX,
        Self::PosY,
        Self::NegY,
        Self::PosZ,
        Self::NegZ,
        Self::Unknown,
    ];

    /// Returns the unit direction, or `None` for `Unknown`.
    #[must_use]
    pub fn direction(self) -> Option<Vector3> {
        match self {
            Self::PosX => Some(Vector3::x()),
            Self::NegX => Some(-Vector3::x()),
            Self::PosY => Some(Vector3::y()),
            Self::NegY => Some(-Vector3::y()),
            Self::PosZ => Some(Vector3::z()),
            Self::NegZ => Some(-Vector3::z()),
            Self::Unknown => None,
        }
    }

    /// Returns the `+`/`-` pair along coordinate `index` (0 = X, 1 = Y, 2 = Z).
    #[must_use]
    pub fn pair(index: usize) -> Option<(Self, Self)> {
        match index {
            0 => Some((Self::PosX, Self::NegX)),
            1 => Some((Self::PosY, Self::NegY)),
            2 => Some((Self::PosZ, Self::NegZ)),
            _ => None,
        }
    }

    /// Position of this axis in [`ReferenceAxis::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_order() {
        for (i, axis) in ReferenceAxis::ALL.iter().enumerate() {
            assert_eq!(axis.index(), i);
        }
    }

    #[test]
    fn pairs_are_opposite() {
        for i in 0..3 {
            let Some((pos, neg)) = ReferenceAxis::pair(i) else {
                panic!("missing pair {i}");
            };
            let (Some(p), Some(n)) = (pos.direction(), neg.direction()) else {
                panic!("canonical axis without direction");
            };
            assert!((p + n).norm() < 1e-12);
        }
        assert!(ReferenceAxis::pair(3).is_none());
        assert!(ReferenceAxis::Unknown.direction().is_none());
    }
}
