pub mod catalog;
pub mod dispatcher;
pub mod gateway;
pub mod requests;
pub mod service;
