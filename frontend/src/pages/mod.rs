pub mod auth_user;
pub mod generate_password;
pub mod generate_two_factor;
