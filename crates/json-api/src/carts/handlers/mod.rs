//! Cart Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod index;
pub(crate) mod update;


#[cfg(test)]
pub(crate) use tests::make_item;
