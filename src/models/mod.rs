pub mod login_params;

pub use login_params::*;
