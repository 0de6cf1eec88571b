//! UI Components
//!
//! Screens and the pieces they are built from.

mod empty_state;
mod home_screen;
mod item_form;
mod log_panel;
mod nav_bar;
mod option_select;
mod screen_section;
mod upload_area;
mod upload_screen;
mod wardrobe_card;
mod wardrobe_screen;

pub use empty_state::EmptyState;
pub use home_screen::HomeScreen;
pub use item_form::ItemForm;
pub use log_panel::LogPanel;
pub use nav_bar::NavBar;
pub use option_select::OptionSelect;
pub use screen_section::ScreenSection;
pub use upload_area::UploadArea;
pub use upload_screen::UploadScreen;
pub use wardrobe_card::WardrobeCard;
pub use wardrobe_screen::WardrobeScreen;
