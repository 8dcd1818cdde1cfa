pub(crate) mod account_form;
pub(crate) mod alert;
pub(crate) mod bar_chart;
pub(crate) mod confirm_dialog;
pub(crate) mod fetch_view;
pub(crate) mod file_picker;
pub(crate) mod loading;
pub(crate) mod nav_item;
pub(crate) mod pager;
pub(crate) mod stat_card;
pub(crate) mod text_field;
pub(crate) mod user_dropdown;

pub use alert::{Alert, AlertKind};
pub use bar_chart::BarChart;
pub use confirm_dialog::ConfirmDialog;
pub use fetch_view::render_loadable;
pub use file_picker::{FilePicker, read_upload, upload_documents};
pub use pager::Pager;
pub use stat_card::StatCard;
pub use text_field::TextField;
