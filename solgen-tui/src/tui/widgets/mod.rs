pub mod spinner;
pub mod toast;

pub use spinner::Spinner;
pub use toast::Toast;
