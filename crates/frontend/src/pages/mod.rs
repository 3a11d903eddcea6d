pub mod create_point;
pub mod home;
