pub mod flow;
pub mod guestbook;
pub mod identity;
