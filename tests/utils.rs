#[path = "utils/datetime.rs"]
mod datetime;
#[path = "utils/text.rs"]
mod text;
