//! Stealable item slots.

/// Rarity band of a steal slot, from rarest to most common.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum StealSlot {
    Rare,
    SemiRare,
    Uncommon,
    Common,
}

impl StealSlot {
    pub const ALL: [StealSlot; 4] = [
        StealSlot::Rare,
        StealSlot::SemiRare,
        StealSlot::Uncommon,
        StealSlot::Common,
    ];

    const fn index(self) -> usize {
        match self {
            StealSlot::Rare => 0,
            StealSlot::SemiRare => 1,
            StealSlot::Uncommon => 2,
            StealSlot::Common => 3,
        }
    }

    /// The next more common band, if any.
    pub const fn next(self) -> Option<StealSlot> {
        match self {
            StealSlot::Rare => Some(StealSlot::SemiRare),
            StealSlot::SemiRare => Some(StealSlot::Uncommon),
            StealSlot::Uncommon => Some(StealSlot::Common),
            StealSlot::Common => None,
        }
    }
}

/// Four item slots, each empty or holding an item name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StealSlots {
    items: [Option<String>; 4],
}

impl StealSlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, slot: StealSlot, item: impl Into<String>) -> Self {
        self.set(slot, item);
        self
    }

    pub fn get(&self, slot: StealSlot) -> Option<&str> {
        self.items[slot.index()].as_deref()
    }

    pub fn set(&mut self, slot: StealSlot, item: impl Into<String>) {
        self.items[slot.index()] = Some(item.into());
    }

    /// Removes and returns the item in `slot`.
    pub fn take(&mut self, slot: StealSlot) -> Option<String> {
        self.items[slot.index()].take()
    }

    pub fn is_empty(&self, slot: StealSlot) -> bool {
        self.items[slot.index()].is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StealSlot, Option<&str>)> {
        StealSlot::ALL.into_iter().map(|slot| (slot, self.get(slot)))
    }
}
