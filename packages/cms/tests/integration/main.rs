mod content_tests;
mod filesystem_tests;
mod i18n_tests;
mod session_tests;
mod store_tests;
