pub(crate) mod icons;
pub(crate) mod style;
pub(crate) mod theme;
