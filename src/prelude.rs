//! Crate prelude.

// The actual prelude.
pub use crate::{
    check::StructureError,
    iter::{IntoIter, Iter, Levels},
    set::BinaryArraySet,
};

// Convenient imports within the crate.
pub(crate) use crate::SmallVec;
pub(crate) use bitvec::prelude::*;
pub(crate) use derive_more::Display;
pub(crate) use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult, Write},
};
