pub mod invoice;
pub mod item;
pub mod requests;
pub mod responses;
