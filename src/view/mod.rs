pub mod content;
pub mod fragment;
pub mod modals;
pub mod nav;
