pub(crate) mod clock;
pub(crate) mod content;
pub(crate) mod route;
pub(crate) mod ui;
