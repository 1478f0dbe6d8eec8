//! Small controls shared by the page views.

pub(crate) mod search_input;
pub(crate) mod select;
pub(crate) mod toggle;
