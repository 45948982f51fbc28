pub(crate) mod contact_form;
