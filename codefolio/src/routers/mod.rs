pub(crate) mod breakpoint;
pub(crate) mod contact;
pub(crate) mod flow;
pub(crate) mod keyboard;
pub(crate) mod navigation;
pub(crate) mod pages;
pub(crate) mod recent;
pub(crate) mod sidebar;
pub(crate) mod status_bar;
pub(crate) mod tabs;
pub(crate) mod window;
