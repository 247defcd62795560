mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod chat;
pub use chat::Chat;

mod profile;
pub use profile::Profile;
