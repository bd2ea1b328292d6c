pub mod dashboard;
pub mod detail;
pub mod form;
pub mod landing;
pub mod login;
pub mod signup;
pub mod transactions;
