pub mod health;
pub mod nutrition;
pub mod question;
pub mod server;
#[cfg(test)]
pub mod test;
