//! Things that occupy a point in an area.

use glam::IVec2;

use crate::id::AreaId;

/// Anything with an area and a position in it.
pub trait Located {
    /// Area the thing is currently in.
    fn area(&self) -> AreaId;

    /// Position within that area.
    fn position(&self) -> IVec2;
}

impl<T: Located + ?Sized> Located for &T {
    fn area(&self) -> AreaId {
        (**self).area()
    }

    fn position(&self) -> IVec2 {
        (**self).position()
    }
}
