pub mod home;
pub mod invoice;
