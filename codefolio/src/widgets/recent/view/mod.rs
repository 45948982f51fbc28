pub(crate) mod recent_list;
