pub(crate) mod demo_selector;
pub(crate) mod pages;
pub(crate) mod shell;
