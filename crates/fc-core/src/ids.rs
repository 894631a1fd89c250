use core::fmt;
use core::num::NonZeroU32;

use crate::error::{FcError, FcResult};

/// Handle to a slot in a graph arena.
///
/// Stored as `slot + 1` in a `NonZeroU32` so `Option<Id>` costs nothing
/// extra. Arenas never reuse slots: an id taken before a removal can only
/// miss afterwards, it never refers to a different node or edge.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Id(NonZeroU32);

pub type NodeId = Id;
pub type EdgeId = Id;

impl Id {
    /// Largest slot an id can address.
    pub const MAX_SLOT: usize = (u32::MAX - 1) as usize;

    /// Id for arena position `slot`, or `FcError::ArenaFull` past `MAX_SLOT`.
    pub fn for_slot(slot: usize) -> FcResult<Self> {
        u32::try_from(slot)
            .ok()
            .and_then(|s| s.checked_add(1))
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or(FcError::ArenaFull { slot })
    }

    /// Id for a 0-based index. Panics on `u32::MAX`; use `for_slot` when the
    /// index is not known to be in range.
    pub fn from_index(index: u32) -> Self {
        match index.checked_add(1).and_then(NonZeroU32::new) {
            Some(raw) => Self(raw),
            None => panic!("id index {index} out of range"),
        }
    }

    /// 0-based index, same value as `slot`.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// Position in the owning arena.
    pub fn slot(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.index(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_and_index_agree() {
        for slot in [0_usize, 1, 41, 65_535] {
            let id = Id::for_slot(slot).unwrap();
            assert_eq!(id.slot(), slot);
            assert_eq!(id, Id::from_index(slot as u32));
        }
    }

    #[test]
    fn slots_past_the_end_are_rejected() {
        assert!(Id::for_slot(Id::MAX_SLOT).is_ok());
        assert_eq!(
            Id::for_slot(Id::MAX_SLOT + 1),
            Err(FcError::ArenaFull {
                slot: Id::MAX_SLOT + 1
            })
        );
    }

    #[test]
    fn niche_keeps_option_small() {
        assert_eq!(size_of::<Option<NodeId>>(), size_of::<u32>());
    }

    #[test]
    fn formatting() {
        let id = Id::from_index(7);
        assert_eq!(id.to_string(), "7");
        assert_eq!(format!("{id:?}"), "#7");
        assert_eq!(format!("{id:>3}"), "  7");
    }
}
