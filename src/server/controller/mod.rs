pub mod activity;
pub mod camper;
pub mod home;
pub mod signup;

#[cfg(test)]
mod test;
