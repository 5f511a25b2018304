pub mod escape;
pub mod handlers;
pub mod pages;
pub mod response;
