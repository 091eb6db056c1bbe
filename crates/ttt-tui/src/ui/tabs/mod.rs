pub mod aufstellung;
pub mod home;
pub mod medien;
pub mod page;
