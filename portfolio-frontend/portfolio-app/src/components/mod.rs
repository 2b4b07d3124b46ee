pub mod anchor_link;
pub mod contact_form;
pub mod dark_mode;
pub mod fade_in;
pub mod lazy_image;
pub mod project_form;
pub mod scroll_to_top;
pub mod search_box;
pub mod search_result;
pub mod toast;
