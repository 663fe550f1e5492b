pub mod load_state;
pub mod signup_viewmodel;
pub mod login_viewmodel;
pub mod activation_viewmodel;
pub mod user_list_viewmodel;
pub mod user_viewmodel;

pub use load_state::LoadState;
pub use signup_viewmodel::{SignUpField, SignUpViewModel};
pub use login_viewmodel::{LoginField, LoginViewModel};
pub use activation_viewmodel::ActivationViewModel;
pub use user_list_viewmodel::UserListViewModel;
pub use user_viewmodel::UserViewModel;
