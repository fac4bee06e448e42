#[path = "components/badge.rs"]
mod badge;

#[path = "components/date_range_picker.rs"]
mod date_range_picker;

#[path = "components/form_fields.rs"]
mod form_fields;

#[path = "components/header.rs"]
mod header;
