pub(crate) mod atoms;
pub(crate) mod navbar;
pub(crate) mod search_bar;
