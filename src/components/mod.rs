//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering
//! logic. Components communicate through Actions rather than direct state
//! mutation.

pub mod help_dialog;
pub mod home;
pub mod layout;
pub mod navbar;
pub mod project_detail;
pub mod quit_dialog;
pub mod splash;

pub use help_dialog::HelpDialog;
pub use home::HomeComponent;
pub use layout::{calculate_main_layout, centered_popup};
pub use navbar::{draw_menu_overlay, draw_navbar, NavbarContext};
pub use project_detail::ProjectDetailDialog;
pub use quit_dialog::QuitDialog;
pub use splash::SplashComponent;
