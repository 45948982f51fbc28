pub(crate) mod activity_bar;
pub(crate) mod explorer;
pub(crate) mod overlay;
