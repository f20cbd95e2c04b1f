//! HTML rendering of the meeting list page and its cards.

pub mod card;
pub mod page;
