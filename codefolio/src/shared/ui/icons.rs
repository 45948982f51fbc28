pub(crate) const ALERT: &[u8] = include_bytes!("../../../assets/svg/alert.svg");
pub(crate) const ARROW_LEFT: &[u8] =
    include_bytes!("../../../assets/svg/arrow-left.svg");
pub(crate) const ARROW_RIGHT: &[u8] =
    include_bytes!("../../../assets/svg/arrow-right.svg");
pub(crate) const BRIEFCASE: &[u8] =
    include_bytes!("../../../assets/svg/briefcase.svg");
pub(crate) const CHEVRON_DOWN: &[u8] =
    include_bytes!("../../../assets/svg/chevron-down.svg");
pub(crate) const CHEVRON_RIGHT: &[u8] =
    include_bytes!("../../../assets/svg/chevron-right.svg");
pub(crate) const CLOSE: &[u8] = include_bytes!("../../../assets/svg/close.svg");
pub(crate) const CODE: &[u8] = include_bytes!("../../../assets/svg/code.svg");
pub(crate) const FILE: &[u8] = include_bytes!("../../../assets/svg/file.svg");
pub(crate) const FOLDER: &[u8] = include_bytes!("../../../assets/svg/folder.svg");
pub(crate) const HOME: &[u8] = include_bytes!("../../../assets/svg/home.svg");
pub(crate) const MAIL: &[u8] = include_bytes!("../../../assets/svg/mail.svg");
pub(crate) const MENU: &[u8] = include_bytes!("../../../assets/svg/menu.svg");
pub(crate) const REACT: &[u8] = include_bytes!("../../../assets/svg/react.svg");
pub(crate) const SIDEBAR_COLLAPSE: &[u8] =
    include_bytes!("../../../assets/svg/sidebar-collapse.svg");
