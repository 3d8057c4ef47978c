pub mod alert;
pub mod button;
pub mod card;
pub mod input;
pub mod layout;
pub mod qr_code;

pub use alert::{Alert, AlertKind};
pub use button::{Button, ButtonVariant};
pub use card::{Card, CardSection};
pub use input::Input;
pub use qr_code::QrCode;
