use std::fmt::Debug;

/// Releases elements starting at the front, the same order iteration visits them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FrontToBack;

/// Releases elements starting at the back.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BackToFront;

/// Order in which a container releases its elements on [`remove_all`](crate::Container::remove_all) and on drop.
///
/// This trait is sealed: [`FrontToBack`] and [`BackToFront`] are the only implementors.
pub trait DropBehavior: seal_drop_behavior::Sealed + Debug + Copy + Default {}

pub(crate) mod seal_drop_behavior {
    pub trait Sealed {
        const IS_INVERTED: bool;
    }
}

impl DropBehavior for FrontToBack {}
impl DropBehavior for BackToFront {}

impl seal_drop_behavior::Sealed for FrontToBack {
    const IS_INVERTED: bool = false;
}
impl seal_drop_behavior::Sealed for BackToFront {
    const IS_INVERTED: bool = true;
}

/// `true` when `D` releases from the back first.
#[inline]
pub(crate) fn drops_from_back<D: DropBehavior>() -> bool {
    <D as seal_drop_behavior::Sealed>::IS_INVERTED
}
