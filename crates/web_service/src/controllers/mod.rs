pub mod auth_controller;
pub mod generate_items_controller;
pub mod system_controller;
