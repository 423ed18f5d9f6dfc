pub mod api;
pub mod identity;
pub mod login;
pub mod navigation;
pub mod notification;
pub mod probe;
pub mod timer;

#[cfg(test)]
mod testing;
