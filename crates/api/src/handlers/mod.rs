pub mod director;
pub mod home;
pub mod movie;
pub mod rating;
pub mod review;
