//! Order Handlers

pub(crate) mod create;
pub(crate) mod index;


#[cfg(test)]
pub(crate) use tests::make_order;
