//! UI Components
//!
//! One view per page plus the pieces they share.

mod nav_bar;
mod book_row;
mod catalog_form;
mod login_view;
mod signup_view;
mod preferences_view;
mod home_view;
mod friends_view;
mod swipe_view;
mod liked_view;
mod book_search_view;
mod isbn_admin_view;

pub use nav_bar::NavBar;
pub use book_row::BookRow;
pub use catalog_form::CatalogFormFields;
pub use login_view::LoginView;
pub use signup_view::SignupView;
pub use preferences_view::PreferencesView;
pub use home_view::HomeView;
pub use friends_view::FriendsView;
pub use swipe_view::SwipeView;
pub use liked_view::LikedView;
pub use book_search_view::BookSearchView;
pub use isbn_admin_view::IsbnAdminView;
