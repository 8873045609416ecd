//! Masonry layout planning for image galleries.
//!
//! [`plan_blocks`] tiles an ordered list into blocks of four shapes:
//!
//! ```text
//! single   ┌──────────┐   double  ┌────┐┌────┐   triple ┌──┐┌──┐┌──┐   tall  ┌───┐
//!          │          │           │    ││    │          │  ││  ││  │         │   │
//!          └──────────┘           └────┘└────┘          └──┘└──┘└──┘         │   │
//!                                                                            └───┘
//! ```
//!
//! The plan is recomputed whenever the item list changes; blocks are never
//! edited in place.

mod block;
mod planner;

pub use block::{BlockKind, GalleryBlock, GalleryItem, RenderHint, PRIORITY_ITEMS};
pub use planner::{pattern_for, plan_blocks};
