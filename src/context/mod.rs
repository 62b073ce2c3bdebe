pub mod app_services;

pub use app_services::{AppServices, ServicesProvider};
