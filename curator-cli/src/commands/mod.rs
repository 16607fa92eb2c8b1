pub(crate) mod list_collection;
pub(crate) mod ls;
pub(crate) mod match_csv;
pub(crate) mod match_lists;
pub(crate) mod report;
pub(crate) mod summarise;
pub(crate) mod verify;
