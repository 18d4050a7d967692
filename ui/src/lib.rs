//! Shared UI crate for the BRSR comparator. Domain logic and views live
//! here; the `web` and `desktop` crates are thin launchers.

pub mod compare;
pub mod core;
pub mod views;

pub mod components {
    // Brand header with the cosmetic theme switch (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;

    // Dynamic CIN input list (components/cin_form.rs)
    pub mod cin_form;
    pub use cin_form::CinForm;
}
