pub mod game;
pub mod generator;
pub mod validator;
