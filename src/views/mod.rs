pub mod app;
pub mod navbar;
pub mod home;
pub mod signup;
pub mod login;
pub mod user_list;
pub mod user_page;
pub mod activation;
pub mod shared;

pub use app::{render_app, render_page};
pub use navbar::render_navbar;
pub use home::render_home;
pub use signup::render_signup;
pub use login::render_login;
pub use user_list::render_user_list;
pub use user_page::render_user_page;
pub use activation::render_activation;
