pub mod drawer;
pub mod footer;
pub mod nav_state;
pub mod navbar;

pub use footer::Footer;
pub use navbar::NavBar;
