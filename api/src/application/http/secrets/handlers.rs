pub mod check_secret;
