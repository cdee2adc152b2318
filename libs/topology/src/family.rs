use std::fmt;

/// Control-point representation a transformation targets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    /// Plain Bezier control points
    Bezier,
    /// Blended Bezier curves (2D parametric domains only)
    Blended,
    /// Gregory patches: Bezier plus extra boundary-adjacent control points
    Gregory,
}

impl Family {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bezier => "bezier",
            Self::Blended => "blended",
            Self::Gregory => "gregory",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Blending order of curved 2D entities
///
/// Zero means blending is disengaged. This value is passed explicitly to every
/// blending-aware lookup; nothing in this workspace stores it globally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BlendingOrder(u8);

impl BlendingOrder {
    pub const OFF: Self = Self(0);

    pub const fn new(order: u8) -> Self {
        Self(order)
    }

    pub const fn is_engaged(&self) -> bool {
        self.0 > 0
    }

    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for BlendingOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
